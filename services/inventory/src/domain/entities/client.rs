//! 客户

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ClientId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub client_id: ClientId,
    pub name: String,
    pub address: String,
    pub phone: String,
}
