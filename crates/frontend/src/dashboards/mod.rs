pub mod d402_system_asset_query;

pub use d402_system_asset_query::ui::SystemAssetQueryPage;
