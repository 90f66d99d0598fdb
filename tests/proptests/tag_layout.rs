//! Property-Based Tests: Tag Layout
//!
//! These tests use the `proptest` framework to generate arbitrary tag
//! text and widths and check the structural guarantees of the renderer
//! rather than specific outputs.
//!
//! # Coverage
//!
//! - **Exact fixed width:** whichever branch the renderer takes (fits,
//!   root overflow, module overflow), a fixed policy always yields a
//!   body of exactly the requested width.
//! - **Variable cap:** the variable policy never exceeds its cap and
//!   always keeps the root as a prefix.
//! - **No panics:** any combination of (multi-byte) text and width
//!   renders without panicking.

use portkit::logging::{TagLayout, WidthPolicy};
use proptest::prelude::*;

const VARIABLE_MAX: usize = 128;

fn body(tag: &str) -> &str {
    tag.strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap()
}

proptest! {
    /// A fixed-width policy pads or clips to exactly `width` characters,
    /// regardless of alignment and of how root and module compare to it.
    #[test]
    fn test_fixed_body_is_exactly_width(
        root in "[a-zA-Z0-9]{0,40}",
        module in "[a-zA-Z0-9]{0,40}",
        width in 1usize..64,
    ) {
        for policy in [WidthPolicy::FixedLeft(width), WidthPolicy::FixedRight(width)] {
            let tag = TagLayout::new(&root, &module, policy).render();
            prop_assert_eq!(body(&tag).chars().count(), width);
        }
    }

    /// Both alignments agree whenever no padding is needed, since only
    /// the padding side differs between them.
    #[test]
    fn test_alignments_agree_on_overflow(
        root in "[a-zA-Z0-9]{1,40}",
        module in "[a-zA-Z0-9]{1,40}",
        width in 1usize..64,
    ) {
        prop_assume!(root.len() + 1 + module.len() > width + 1);
        let left = TagLayout::new(&root, &module, WidthPolicy::FixedLeft(width)).render();
        let right = TagLayout::new(&root, &module, WidthPolicy::FixedRight(width)).render();
        prop_assert_eq!(left, right);
    }

    /// The variable policy keeps the root as a prefix (clipped when it
    /// alone exceeds the cap) and never renders a body over the cap.
    #[test]
    fn test_variable_body_capped_and_root_prefixed(
        root in "[a-zA-Z0-9]{0,200}",
        module in "[a-zA-Z0-9]{0,200}",
    ) {
        let tag = TagLayout::new(&root, &module, WidthPolicy::Variable).render();
        let rendered = body(&tag);
        prop_assert!(rendered.chars().count() <= VARIABLE_MAX);
        if root.len() + 1 <= VARIABLE_MAX {
            prop_assert!(rendered.starts_with(&root));
        } else {
            prop_assert!(root.starts_with(rendered));
        }
    }

    /// Rendering never panics, including for multi-byte text where byte
    /// and character counts diverge.
    #[test]
    fn test_render_does_not_panic(
        root in "\\PC{0,64}",
        module in "\\PC{0,64}",
        width in 0usize..256,
    ) {
        for policy in [
            WidthPolicy::FixedLeft(width),
            WidthPolicy::FixedRight(width),
            WidthPolicy::Variable,
        ] {
            let _ = TagLayout::new(&root, &module, policy).render();
        }
    }
}
