pub mod gad7;
pub mod ghq12;
pub mod phq9;
