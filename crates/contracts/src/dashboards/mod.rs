pub mod d402_system_asset_query;
