pub mod repository;
pub mod service;

pub use repository::{RecordRepository, SeaOrmRecordRepository};
pub use service::RecordService;
