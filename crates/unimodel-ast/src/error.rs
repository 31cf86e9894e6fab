// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Errors raised when registering compilation units.

use thiserror::Error;

use crate::source::FileId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    /// The unit's nodes were stamped with a different file id.
    #[error("compilation unit for {path} was built for {found}, expected {expected}")]
    UnitMismatch {
        path: String,
        expected: FileId,
        found: FileId,
    },

    #[error("duplicate source path: {path}")]
    DuplicatePath { path: String },
}

pub type AstResult<T> = Result<T, AstError>;
