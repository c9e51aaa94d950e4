// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A one-line conditional expression.  Rust's `if` is already an
/// expression, but `cargo fmt` spreads it over five lines, and the
/// border rules of the seam search (clamp at the left edge, clamp at
/// the right edge) read far better as a table of one-liners.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn picks_the_matching_arm() {
        let x: u32 = 0;
        assert_eq!(cq!(x == 0, 0, x - 1), 0);
        let x: u32 = 4;
        assert_eq!(cq!(x == 0, 0, x - 1), 3);
    }
}
