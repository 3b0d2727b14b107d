pub mod launch_services;
pub mod pool;
