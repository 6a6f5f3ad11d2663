use crate::error::PoliceError;
use crate::types::{CreatePoliceInput, Police, PoliceId};

pub trait PoliceRepository {
    fn create(&self, input: CreatePoliceInput) -> Result<Police, PoliceError>;
    fn get(&self, id: PoliceId) -> Result<Option<Police>, PoliceError>;
}
