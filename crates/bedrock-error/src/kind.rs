// Failure kinds
// Every concrete failure kind, its place in the hierarchy and its canned messages

use std::fmt;

use crate::{Checking, Severity};

/// Placeholder substituted by [`fill_template`].
const PLACEHOLDER: &str = "%s";

/// Subject used when a template has more placeholders than subjects.
const MISSING_SUBJECT: &str = "object";

/// Unchecked failure kinds.
///
/// Every kind descends from exactly one base: [`SoftKind::Exception`] for
/// recoverable failures or [`SoftKind::Error`] for severe ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SoftKind {
    /// Base of every recoverable unchecked failure
    Exception,
    /// Base of every severe unchecked failure
    Error,

    /// An object could not be created
    Creation,
    /// A non-instantiable utility type was instantiated
    Utility,
    /// A singleton was created a second time
    Singleton,
    /// A builder could not produce its object
    Builder,

    /// An object failed validation
    Validation,
    /// A required value was absent
    Null,
    /// A value that had to be absent was present
    NotNull,
    /// Two values that had to differ were equal
    Equal,
    /// Two values that had to be equal differed
    NotEqual,

    /// The environment refused an operation such as exit or halt
    Environment,

    /// A capability could not complete its operation
    Function,
    /// A function could not be called
    Call,
    /// A callback failed
    Callback,
    /// An action failed
    Perform,
    /// A consumer failed
    Consume,
    /// A handler reacting to a value failed
    Handler,
    /// A value could not be passed along a pipeline
    Convey,
    /// A supplier could not supply
    Supply,
    /// A value could not be read
    Get,
    /// A value could not be written
    Set,
    /// A predicate could not evaluate its argument
    Evaluate,
    /// A predicate failed while composing or reacting
    Predicate,
    /// A condition could not be computed
    Condition,
    /// A failure escaped the code meant to catch it
    Uncaught,

    /// A capability failed severely
    FunctionError,
}

impl SoftKind {
    /// Every soft kind, bases first.
    pub const ALL: [SoftKind; 27] = [
        SoftKind::Exception,
        SoftKind::Error,
        SoftKind::Creation,
        SoftKind::Utility,
        SoftKind::Singleton,
        SoftKind::Builder,
        SoftKind::Validation,
        SoftKind::Null,
        SoftKind::NotNull,
        SoftKind::Equal,
        SoftKind::NotEqual,
        SoftKind::Environment,
        SoftKind::Function,
        SoftKind::Call,
        SoftKind::Callback,
        SoftKind::Perform,
        SoftKind::Consume,
        SoftKind::Handler,
        SoftKind::Convey,
        SoftKind::Supply,
        SoftKind::Get,
        SoftKind::Set,
        SoftKind::Evaluate,
        SoftKind::Predicate,
        SoftKind::Condition,
        SoftKind::Uncaught,
        SoftKind::FunctionError,
    ];

    /// The kind this one directly specializes, `None` for the two bases.
    pub fn parent(self) -> Option<SoftKind> {
        use SoftKind::*;
        match self {
            Exception | Error => None,
            Creation | Validation | Environment | Function => Some(Exception),
            Utility | Singleton | Builder => Some(Creation),
            Null | NotNull | Equal | NotEqual => Some(Validation),
            Call | Callback | Perform | Consume | Handler | Convey | Supply | Get | Set | Evaluate
            | Predicate | Condition | Uncaught => Some(Function),
            FunctionError => Some(Error),
        }
    }

    /// The base kind at the root of this kind's hierarchy.
    pub fn base(self) -> SoftKind {
        let mut current = self;
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Whether this kind is `ancestor` or descends from it.
    pub fn is_a(self, ancestor: SoftKind) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == ancestor {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    pub fn severity(self) -> Severity {
        match self.base() {
            SoftKind::Error => Severity::Error,
            _ => Severity::Exception,
        }
    }

    pub fn checking(self) -> Checking {
        Checking::Soft
    }

    /// The canned message used by the zero-argument constructor.
    pub fn default_message(self) -> Option<&'static str> {
        use SoftKind::*;
        match self {
            Exception | Error => None,
            Creation => Some("The object could not be created"),
            Utility => Some("The utility class object must not be created"),
            Singleton => Some("The singleton object has already been created"),
            Builder => Some("The object could not be built"),
            Validation => Some("The object cannot be validated"),
            Null => Some("The instance should not be null"),
            NotNull => Some("The object must be null"),
            Equal => Some("The primary object must not be equal to the secondary object"),
            NotEqual => Some("The primary object must be equal to the secondary object"),
            Environment => Some("The environment operation is not permitted"),
            Function => Some("The function cannot be executed"),
            Call => Some("The function cannot be called"),
            Callback => Some("Failed to execute the callback"),
            Perform => Some("Failed to perform the action"),
            Consume => Some("Failed to consume the object"),
            Handler => Some("Failed to handle the object"),
            Convey => Some("Failed to convey the object"),
            Supply => Some("The object could not be supplied"),
            Get => Some("Failed to get the object"),
            Set => Some("Failed to set the object"),
            Evaluate => Some("The object could not be evaluated"),
            Predicate => Some("The predicate cannot be applied"),
            Condition => Some("Failed to execute the condition"),
            Uncaught => Some("Failed to catch the exception or error"),
            FunctionError => Some("Failed to execute the function"),
        }
    }

    /// The message template naming the offending entity, `%s` marks each subject.
    pub fn template(self) -> Option<&'static str> {
        use SoftKind::*;
        match self {
            Exception | Error => None,
            Creation => Some("The %s could not be created"),
            Utility => Some("%s must not be created"),
            Singleton => Some("The %s has already been created"),
            Builder => Some("The %s could not be built"),
            Validation => Some("%s cannot be validated"),
            Null => Some("The %s should not be null"),
            NotNull => Some("%s must be null"),
            Equal => Some("%s must not be equal to the %s"),
            NotEqual => Some("%s must be equal to the %s"),
            Environment => Some("The %s is not permitted"),
            Function => Some("The %s cannot be executed"),
            Call => Some("The %s cannot be called"),
            Callback => Some("Failed to execute the %s"),
            Perform => Some("Failed to perform the %s"),
            Consume => Some("Failed to consume the %s"),
            Handler => Some("Failed to handle the %s"),
            Convey => Some("Failed to convey the %s"),
            Supply => Some("The %s could not be supplied"),
            Get => Some("Failed to get the %s"),
            Set => Some("Failed to set %s"),
            Evaluate => Some("The %s could not be evaluated"),
            Predicate => Some("The %s cannot be applied"),
            Condition => Some("Failed to execute the %s"),
            Uncaught => Some("Failed to catch the %s"),
            FunctionError => Some("Failed to execute %s"),
        }
    }

    pub fn name(self) -> &'static str {
        use SoftKind::*;
        match self {
            Exception => "soft exception",
            Error => "soft error",
            Creation => "creation",
            Utility => "utility",
            Singleton => "singleton",
            Builder => "builder",
            Validation => "validation",
            Null => "null",
            NotNull => "not null",
            Equal => "equal",
            NotEqual => "not equal",
            Environment => "environment",
            Function => "function",
            Call => "call",
            Callback => "callback",
            Perform => "perform",
            Consume => "consume",
            Handler => "handler",
            Convey => "convey",
            Supply => "supply",
            Get => "get",
            Set => "set",
            Evaluate => "evaluate",
            Predicate => "predicate",
            Condition => "condition",
            Uncaught => "uncaught",
            FunctionError => "function error",
        }
    }

    /// Stable machine-readable code, e.g. `SOFT_NULL`.
    pub fn code(self) -> &'static str {
        use SoftKind::*;
        match self {
            Exception => "SOFT_EXCEPTION",
            Error => "SOFT_ERROR",
            Creation => "SOFT_CREATION",
            Utility => "SOFT_UTILITY",
            Singleton => "SOFT_SINGLETON",
            Builder => "SOFT_BUILDER",
            Validation => "SOFT_VALIDATION",
            Null => "SOFT_NULL",
            NotNull => "SOFT_NOT_NULL",
            Equal => "SOFT_EQUAL",
            NotEqual => "SOFT_NOT_EQUAL",
            Environment => "SOFT_ENVIRONMENT",
            Function => "SOFT_FUNCTION",
            Call => "SOFT_CALL",
            Callback => "SOFT_CALLBACK",
            Perform => "SOFT_PERFORM",
            Consume => "SOFT_CONSUME",
            Handler => "SOFT_HANDLER",
            Convey => "SOFT_CONVEY",
            Supply => "SOFT_SUPPLY",
            Get => "SOFT_GET",
            Set => "SOFT_SET",
            Evaluate => "SOFT_EVALUATE",
            Predicate => "SOFT_PREDICATE",
            Condition => "SOFT_CONDITION",
            Uncaught => "SOFT_UNCAUGHT",
            FunctionError => "SOFT_FUNCTION_ERROR",
        }
    }
}

impl fmt::Display for SoftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Checked failure kinds. Only the two bases exist; they are kept so that
/// both severities have a checked counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum StrictKind {
    /// Base of every recoverable checked failure
    Exception,
    /// Base of every severe checked failure
    Error,
}

impl StrictKind {
    pub const ALL: [StrictKind; 2] = [StrictKind::Exception, StrictKind::Error];

    pub fn severity(self) -> Severity {
        match self {
            StrictKind::Exception => Severity::Exception,
            StrictKind::Error => Severity::Error,
        }
    }

    pub fn checking(self) -> Checking {
        Checking::Strict
    }

    pub fn default_message(self) -> Option<&'static str> {
        None
    }

    pub fn template(self) -> Option<&'static str> {
        None
    }

    pub fn name(self) -> &'static str {
        match self {
            StrictKind::Exception => "strict exception",
            StrictKind::Error => "strict error",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            StrictKind::Exception => "STRICT_EXCEPTION",
            StrictKind::Error => "STRICT_ERROR",
        }
    }
}

impl fmt::Display for StrictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Substitutes each `%s` in `template` with the next subject, in order.
///
/// Placeholders left over once the subjects run out are filled with
/// `"object"`; surplus subjects are ignored.
pub fn fill_template(template: &str, subjects: &[&str]) -> String {
    let mut filled = String::with_capacity(template.len() + subjects.iter().map(|s| s.len()).sum::<usize>());
    let mut subjects = subjects.iter();
    let mut pieces = template.split(PLACEHOLDER).peekable();
    while let Some(piece) = pieces.next() {
        filled.push_str(piece);
        if pieces.peek().is_some() {
            filled.push_str(subjects.next().copied().unwrap_or(MISSING_SUBJECT));
        }
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_soft_kind_has_one_base() {
        for kind in SoftKind::ALL {
            let base = kind.base();
            assert!(base == SoftKind::Exception || base == SoftKind::Error, "{kind:?}");
            assert!(kind.is_a(base));
        }
    }

    #[test]
    fn test_hierarchy() {
        assert!(SoftKind::Null.is_a(SoftKind::Validation));
        assert!(SoftKind::Null.is_a(SoftKind::Exception));
        assert!(!SoftKind::Null.is_a(SoftKind::Creation));
        assert!(SoftKind::Utility.is_a(SoftKind::Creation));
        assert!(SoftKind::Supply.is_a(SoftKind::Function));
        assert!(SoftKind::Convey.is_a(SoftKind::Function));
        assert!(SoftKind::Handler.is_a(SoftKind::Function));
        assert!(SoftKind::Predicate.is_a(SoftKind::Function));
        assert!(!SoftKind::Exception.is_a(SoftKind::Null));
        assert_eq!(SoftKind::FunctionError.severity(), Severity::Error);
        assert_eq!(SoftKind::Consume.severity(), Severity::Exception);
    }

    #[test]
    fn test_only_bases_lack_messages() {
        for kind in SoftKind::ALL {
            let is_base = kind.parent().is_none();
            assert_eq!(kind.default_message().is_none(), is_base, "{kind:?}");
            assert_eq!(kind.template().is_none(), is_base, "{kind:?}");
        }
    }

    #[test]
    fn test_convey_messages() {
        assert_eq!(SoftKind::Convey.default_message(), Some("Failed to convey the object"));
        assert_eq!(
            fill_template(SoftKind::Convey.template().unwrap_or_default(), &["order"]),
            "Failed to convey the order"
        );
        assert_eq!(SoftKind::Handler.code(), "SOFT_HANDLER");
    }

    #[test]
    fn test_fill_template() {
        assert_eq!(fill_template("The %s should not be null", &["consumer"]), "The consumer should not be null");
        assert_eq!(
            fill_template("%s must be equal to the %s", &["left", "right"]),
            "left must be equal to the right"
        );
        assert_eq!(fill_template("%s must be equal to the %s", &["left"]), "left must be equal to the object");
        assert_eq!(fill_template("no placeholder", &["ignored"]), "no placeholder");
    }

    #[test]
    fn test_strict_kinds() {
        assert_eq!(StrictKind::Exception.checking(), Checking::Strict);
        assert_eq!(StrictKind::Error.severity(), Severity::Error);
        assert_eq!(StrictKind::Exception.code(), "STRICT_EXCEPTION");
    }
}
