use crate::outcome::core::Outcome;

/// Collects outcomes fail-fast: the first failure is returned and the rest of
/// the iterator is not consumed.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<i32>> =
///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all.into_value(), Some(vec![1, 2]));
/// ```
impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        match iter.into_iter().map(Outcome::into_result).collect::<Result<C, _>>() {
            Ok(collection) => Outcome::Success(collection),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    /// Yields the success value once, or nothing on failure.
    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.get_or_none().into_iter()
    }
}

impl<T> Outcome<T> {
    /// Iterates over the success value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.into_iter()
    }
}
