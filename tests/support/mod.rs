pub mod mock_editor;
pub mod mock_engine;
