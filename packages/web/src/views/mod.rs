mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod dashboard;
pub use dashboard::Dashboard;

mod history;
pub use history::History;

mod profile;
pub use profile::Profile;

mod protected_layout;
pub use protected_layout::ProtectedLayout;
