use super::Column;
use std::borrow::Cow;

pub struct Error {
    code: ErrorCode,
    column: Column,
    message: Cow<'static, str>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            column: 0..0,
            message: Cow::Borrowed(""),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message<T: Into<Cow<'static, str>>>(self, message: T) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 2,
    SectionMismatch = 3,
    SectionStackEmpty = 4,
    UnclosedSection = 5,
    Overflow = 6,
    StackOverflow = 7,
    ParentNodeNotFound = 8,
    StackUnderflow = 9,
    InvalidStackIndex = 10,
    DivisionByZero = 11,
    NodeNotFound = 12,
    BadInput = 13,
    InternalError = 51,
    FileNotFound = 53,
    DiskIoError = 57,
    InputPastEnd = 62,
    PermissionDenied = 70,
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        use std::io::ErrorKind;
        let code = match error.kind() {
            ErrorKind::NotFound => ErrorCode::FileNotFound,
            ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            ErrorKind::UnexpectedEof => ErrorCode::InputPastEnd,
            ErrorKind::InvalidData => ErrorCode::BadInput,
            _ => ErrorCode::DiskIoError,
        };
        Error::new(code).message(error.to_string())
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            SyntaxError => "SYNTAX ERROR",
            SectionMismatch => "SECTION MISMATCH",
            SectionStackEmpty => "SECTION STACK EMPTY",
            UnclosedSection => "UNCLOSED SECTION",
            Overflow => "OVERFLOW",
            StackOverflow => "STACK OVERFLOW",
            ParentNodeNotFound => "PARENT NODE NOT FOUND",
            StackUnderflow => "STACK UNDERFLOW",
            InvalidStackIndex => "INVALID STACK INDEX",
            DivisionByZero => "DIVISION BY ZERO",
            NodeNotFound => "NODE NOT FOUND",
            BadInput => "BAD INPUT",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
            DiskIoError => "DISK I/O ERROR",
            InputPastEnd => "INPUT PAST END",
            PermissionDenied => "PERMISSION DENIED",
        };
        write!(f, "{}", code_str)?;
        if (0..0) != self.column {
            write!(f, " IN ({}..{})", self.column.start, self.column.end)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
