mod api_root;
mod error;
