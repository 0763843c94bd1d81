pub mod errors;
pub mod db;
pub mod character;
pub mod inventory;
pub mod room;

/// Current wall clock in epoch millis, the unit of every `updated_at` column.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests;
