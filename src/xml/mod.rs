//! XML-Export der Keyframes.
//!
//! Jeder Keyframe wird als `<KeyFrame Frame=".." Value=".." Slope=".."/>`-Zeile
//! geschrieben, passend zum Keyframe-Format gängiger Animations-Configs.

pub mod writer;

pub use writer::write_keyframe_export;
