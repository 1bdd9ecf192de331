use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Клиент юридической фирмы (строка списка).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    /// ИНН / рег. номер, если клиент — организация.
    pub tax_id: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

impl Client {
    /// Значение поля по имени accessor-а колонки/фильтра.
    pub fn field(&self, accessor: &str) -> Option<String> {
        match accessor {
            "name" => Some(self.name.clone()),
            "email" => self.email.clone(),
            "phone" => self.phone.clone(),
            "city" => self.city.clone(),
            "tax_id" => self.tax_id.clone(),
            "is_active" => Some(if self.is_active { "активен" } else { "архив" }.to_string()),
            "created_at" => Some(self.created_at.clone()),
            _ => None,
        }
    }
}
