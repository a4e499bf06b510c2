pub mod bullet;
pub mod disclaimer;
pub mod heading;
pub mod paragraph;

pub use bullet::Bullet;
pub use disclaimer::Disclaimer;
pub use heading::Heading;
pub use paragraph::Paragraph;
