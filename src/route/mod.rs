pub mod dashboard;
#[cfg(test)]
mod dashboard_test;
pub mod employee;
pub mod role;
#[cfg(test)]
mod role_test;
