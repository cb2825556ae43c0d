pub(crate) mod customers;
pub(crate) mod dashboard;
pub(crate) mod health;
pub(crate) mod orders;
pub(crate) mod products;
pub(crate) mod reviews;
pub(crate) mod rfm;
