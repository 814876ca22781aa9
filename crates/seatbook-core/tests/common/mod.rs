use seatbook_core::{models::PassengerDetails, BookingRegistry, RegistryBuilder};

/// Helper function to create a registry over the standard cabin with a fixed
/// reference seed
pub fn create_test_registry() -> BookingRegistry {
    RegistryBuilder::new()
        .with_reference_seed(Some(42))
        .build()
        .expect("Failed to create registry")
}

/// Helper function to build passenger details with a derived passport number
pub fn passenger(first_name: &str, last_name: &str) -> PassengerDetails {
    PassengerDetails {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        passport_number: format!("P{}{}", first_name.len(), last_name.to_uppercase()),
    }
}
