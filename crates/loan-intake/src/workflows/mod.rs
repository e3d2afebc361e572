pub mod applications;
pub mod banks;
pub mod offers;
