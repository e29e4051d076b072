use std::mem::MaybeUninit;
use std::ptr::NonNull;

// NOTE: One node type serves both live entries and the sentinel. Only the sentinel's value is
// ever uninitialized, and nothing reads a value through the sentinel.

pub(crate) struct Node<T> {
    pub prev: NonNull<Node<T>>,
    pub next: NonNull<Node<T>>,
    pub value: MaybeUninit<T>,
}

impl<T> Node<T> {
    /// Allocates the sentinel: a valueless node linked to itself in both directions, forming
    /// the empty ring.
    pub(crate) fn sentinel() -> NonNull<Node<T>> {
        let node = NonNull::from(Box::leak(Box::new(Node {
            prev: NonNull::dangling(),
            next: NonNull::dangling(),
            value: MaybeUninit::uninit(),
        })));

        // SAFETY: The node was just allocated and is exclusively ours.
        unsafe {
            (*node.as_ptr()).prev = node;
            (*node.as_ptr()).next = node;
        }

        node
    }

    /// Allocates a live node holding `value`, linked between `prev` and `next`. The neighbors
    /// themselves are not updated.
    pub(crate) fn alloc(value: T, prev: NonNull<Node<T>>, next: NonNull<Node<T>>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            prev,
            next,
            value: MaybeUninit::new(value),
        })))
    }
}
