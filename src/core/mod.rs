pub mod nav;
pub mod paint;
pub mod particles;
pub mod reveal;
pub mod submission;

pub use nav::NavState;
pub use paint::{paint_frame, Rgb, Surface};
pub use particles::{Connection, Particle, ParticleConfig, ParticleField};
pub use reveal::{RevealDecision, RevealKey, RevealTargets};
pub use submission::{FormMessages, FormView, SubmitOutcome, SubmitRequest, Transport, TransportReply};
