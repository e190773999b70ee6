/// Outcome of a recursive removal below some node.
pub(crate) enum RemoveResult<V> {
    /// The key wasn't found so nothing was removed.
    NotFound,
    /// The Node returning this matched the key and has at most one child. Its parent unlinks it,
    /// splicing the child (if any) into its slot, and takes its `V`.
    RemoveSelf,
    /// A node further down was removed yielding the value `V`.
    Removed(V),
}
