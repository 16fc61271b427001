// Defaults for parameters
const RADIX_DEFAULT: usize = 10;
const GAP_DIVISOR_DEFAULT: usize = 2;

// Valid minimums/left bounds of parameters
const RADIX_MINIMUM: usize = 2;
const GAP_DIVISOR_MINIMUM: usize = 2;


/// Tuning parameters for `radix_sort`. Use `RadixSortParams::default()` for base 10 digits.
#[derive(Debug, Clone, PartialEq)]
pub struct RadixSortParams {
    pub(crate) radix: usize,
}

/// Builder object to set custom radix sort parameters.
pub struct RadixSortParamsBuilder {
    radix: Option<usize>,
}

impl RadixSortParams {
    /// Enters the builder pattern, allowing custom parameters to be set using setter methods.
    ///
    /// # Returns
    /// * the radix sort parameter builder
    pub fn builder() -> RadixSortParamsBuilder {
        RadixSortParamsBuilder { radix: None }
    }

    pub fn radix(&self) -> usize {
        self.radix
    }
}

impl Default for RadixSortParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RadixSortParamsBuilder {

    /// Sets the base of the digits that each counting pass sorts on. Larger bases mean fewer
    /// passes over the data but a larger count table per pass. Defaults to 10.
    ///
    /// # Parameters
    /// * radix - the digit base, at least 2
    ///
    /// # Returns
    /// * the radix sort parameter builder
    pub fn radix(mut self, radix: usize) -> RadixSortParamsBuilder {
        self.radix = Some(validate_input_left_bound(radix, RADIX_MINIMUM, "radix"));
        self
    }

    /// Finishes building the parameters.
    pub fn build(self) -> RadixSortParams {
        RadixSortParams { radix: self.radix.unwrap_or(RADIX_DEFAULT) }
    }
}

/// Tuning parameters for `shell_sort`. The gap starts at `n / gap_divisor` and is divided by
/// `gap_divisor` after every pass, finishing with a pass at gap 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellSortParams {
    pub(crate) gap_divisor: usize,
}

/// Builder object to set custom shell sort parameters.
pub struct ShellSortParamsBuilder {
    gap_divisor: Option<usize>,
}

impl ShellSortParams {
    pub fn builder() -> ShellSortParamsBuilder {
        ShellSortParamsBuilder { gap_divisor: None }
    }

    pub fn gap_divisor(&self) -> usize {
        self.gap_divisor
    }
}

impl Default for ShellSortParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ShellSortParamsBuilder {

    /// Sets the factor the gap shrinks by between passes. Defaults to 2 (Shell's original
    /// sequence).
    ///
    /// # Parameters
    /// * gap_divisor - the shrink factor, at least 2
    ///
    /// # Returns
    /// * the shell sort parameter builder
    pub fn gap_divisor(mut self, gap_divisor: usize) -> ShellSortParamsBuilder {
        self.gap_divisor = Some(validate_input_left_bound(
            gap_divisor, GAP_DIVISOR_MINIMUM, "gap_divisor"));
        self
    }

    pub fn build(self) -> ShellSortParams {
        ShellSortParams { gap_divisor: self.gap_divisor.unwrap_or(GAP_DIVISOR_DEFAULT) }
    }
}

fn validate_input_left_bound(input_param: usize, left_bound: usize, param: &str) -> usize {
    if input_param < left_bound {
        log::warn!(
            "{param} ({input_param}) cannot be lower than {left_bound}. Set to {left_bound}."
        );
        left_bound
    } else {
        input_param
    }
}
