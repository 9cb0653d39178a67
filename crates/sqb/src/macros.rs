/// Left-fold two or more expressions with AND: `a AND b AND c`.
///
/// ```
/// use sqb::{and, eq};
///
/// let expr = and!(eq("a", 1), eq("b", 2), eq("c", 3));
/// let q = sqb::new("?").bind(expr).build().unwrap();
/// assert_eq!(q.sql, "a = ? AND b = ? AND c = ?");
/// ```
#[macro_export]
macro_rules! and {
    ($left:expr, $right:expr $(, $rest:expr)* $(,)?) => {
        $crate::and($left, $right)$(.and($rest))*
    };
}

/// Left-fold two or more expressions with OR: `((a OR b) OR c)`.
///
/// ```
/// use sqb::{eq, or};
///
/// let expr = or!(eq("a", 1), eq("b", 2), eq("c", 3));
/// let q = sqb::new("?").bind(expr).build().unwrap();
/// assert_eq!(q.sql, "((a = ? OR b = ?) OR c = ?)");
/// ```
#[macro_export]
macro_rules! or {
    ($left:expr, $right:expr $(, $rest:expr)* $(,)?) => {
        $crate::or($left, $right)$(.or($rest))*
    };
}
