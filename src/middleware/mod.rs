pub mod problem_instance;
pub mod request_id;
