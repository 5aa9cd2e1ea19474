pub mod mock_server;
pub mod test_context;
