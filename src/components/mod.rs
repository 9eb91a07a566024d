//! The components module contains the presentational pieces shared by every
//! landing page variant. None of them own tracker state; they receive what they
//! need through props.

mod hero;
pub use hero::Hero;

mod section_block;
pub use section_block::SectionBlock;
