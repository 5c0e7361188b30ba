pub mod openrouter_client;
