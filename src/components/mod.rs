pub mod home;
pub mod login;

pub use home::HomeScreen;
pub use login::LoginScreen;
