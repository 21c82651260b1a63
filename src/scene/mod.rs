mod ball;
mod camera;
mod core;
mod court;
mod hoops;
mod hud;
mod input;
mod mesh;

pub use ball::BallPlugin;
pub use camera::CameraPlugin;
pub use self::core::CorePlugin;
pub(crate) use self::core::UpdateSet;
pub use court::CourtPlugin;
pub use hoops::HoopsPlugin;
pub use hud::HudPlugin;
pub use input::InputPlugin;
