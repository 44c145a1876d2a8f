/// Seeding and lookup of administrators
pub mod administrators;
/// Login for clients and administrators, and the session value it produces
pub mod auth;
/// Client registration, lookup and cascading removal
pub mod clients;
/// Car catalog: adding, listing, archiving and repricing cars
pub mod inventory;
/// Purchases, purchase history, confirmation and sales analytics
pub mod sales;
/// Field validation rules shared by the registry and the inventory
pub mod validation;
