pub mod list_ops;
