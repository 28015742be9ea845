pub mod page;
pub mod results;

pub use page::SystemAssetQueryPage;
