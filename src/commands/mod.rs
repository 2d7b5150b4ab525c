pub mod delete;
pub mod stop;
pub mod up;
