pub mod login;
pub mod register;
pub mod settings;

pub use login::LoginPage;
pub use register::RegisterPage;
pub use settings::SettingsPage;
