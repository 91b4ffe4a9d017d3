mod home;
pub use home::Home;

mod uploads;
pub use uploads::ProfileUploads;
