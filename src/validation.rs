use crate::ClavisError;

/// Checks caller supplied indices against the logical size of a structure before any
/// state is touched, so that a failed call leaves the structure unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IndexValidator {
    len: usize,
    context: &'static str,
}

impl IndexValidator {
    pub(crate) fn new(len: usize, context: &'static str) -> Self {
        Self { len, context }
    }

    pub(crate) fn validate(&self, idx: usize) -> Result<(), ClavisError> {
        if idx >= self.len {
            return Err(ClavisError::IndexOutOfRange(format!(
                "{} index {idx} is outside [0, {})", self.context, self.len
            )));
        }
        Ok(())
    }

    pub(crate) fn validate_pair(&self, x: usize, y: usize) -> Result<(), ClavisError> {
        self.validate(x)?;
        self.validate(y)
    }

    /// Half-open bounds are allowed to touch `len` on the right.
    pub(crate) fn validate_bound(&self, bound: usize) -> Result<(), ClavisError> {
        if bound > self.len {
            return Err(ClavisError::IndexOutOfRange(format!(
                "{} bound {bound} is outside [0, {}]", self.context, self.len
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MatrixValidator<'a, T> {
    data: &'a [Vec<T>],
}

impl<'a, T> MatrixValidator<'a, T> {
    pub(crate) fn new(data: &'a [Vec<T>]) -> Self {
        Self { data }
    }

    pub(crate) fn validate_square(&self) -> Result<(), ClavisError> {
        let n = self.data.len();
        for (i, row) in self.data.iter().enumerate() {
            if row.len() != n {
                return Err(ClavisError::WrongDimension(format!(
                    "Distance matrix has {n} rows, but row {i} has {} columns", row.len()
                )));
            }
        }
        Ok(())
    }
}
