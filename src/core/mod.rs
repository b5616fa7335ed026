pub mod amount;
pub mod etl;
pub mod manifest;
pub mod pipeline;

pub use crate::domain::model::{ConversionReport, InputRow, OutputRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
