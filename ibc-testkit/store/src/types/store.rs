use std::fmt::Debug;
use std::marker::PhantomData;

use crate::context::Store;
use crate::impls::{RevertibleStore, SharedStore};
use crate::types::Path;
use crate::utils::{Codec, JsonCodec, ProtobufCodec, U64Codec};

/// A store shared between typed views, with nested write buffers.
pub type MainStore<S> = SharedStore<RevertibleStore<S>>;

/// A `TypedStore` that uses the `JsonCodec`
pub type JsonStore<S, K, V> = TypedStore<S, K, JsonCodec<V>>;

/// A `TypedStore` that uses the `ProtobufCodec`
pub type ProtobufStore<S, K, V, R> = TypedStore<S, K, ProtobufCodec<V, R>>;

/// A `TypedStore` holding counters
pub type U64Store<S, K> = TypedStore<S, K, U64Codec>;

#[derive(Clone, Debug)]
pub struct TypedStore<S, K, C> {
    store: S,
    _key: PhantomData<K>,
    _codec: PhantomData<C>,
}

impl<S, K, C, V> TypedStore<S, K, C>
where
    S: Store,
    C: Codec<Type = V>,
    K: Into<Path> + Clone,
{
    #[inline]
    pub fn new(store: S) -> Self {
        Self {
            store,
            _codec: PhantomData,
            _key: PhantomData,
        }
    }

    /// Stores `value` at `path`, returning the value it replaced.
    ///
    /// # Panics
    ///
    /// Panics if `value` cannot be encoded.
    #[inline]
    pub fn set(&mut self, path: K, value: V) -> Result<Option<V>, S::Error> {
        let path: Path = path.into();
        let Some(encoded) = C::encode(&value) else {
            panic!("value stored at {path} cannot be encoded");
        };
        self.store
            .set(path, encoded.as_ref().to_vec())
            .map(|prev_val| prev_val.and_then(|v| C::decode(&v)))
    }

    #[inline]
    pub fn delete(&mut self, path: K) -> Option<V> {
        self.store
            .delete(&path.into())
            .and_then(|v| C::decode(&v))
    }

    #[inline]
    pub fn get(&self, path: &K) -> Option<V> {
        self.store
            .get(&path.clone().into())
            .and_then(|v| C::decode(&v))
    }

    #[inline]
    pub fn get_keys(&self, key_prefix: &Path) -> Vec<Path> {
        self.store.get_keys(key_prefix)
    }
}

const QUEUE_LENGTH_KEY: u8 = 0x00;
const QUEUE_ELEMENT_KEY: u8 = 0x01;

/// Append-only queues of typed values, each addressed by a key prefix.
///
/// A queue keeps its length at `prefix ++ [0x00]` and its `i`-th element at
/// `prefix ++ [0x01] ++ i (big-endian u64)`, so elements of one queue are
/// adjacent and ordered by index in the key space.
#[derive(Clone, Debug)]
pub struct TypedQueue<S, K, C> {
    store: S,
    _key: PhantomData<K>,
    _codec: PhantomData<C>,
}

impl<S, K, C, V> TypedQueue<S, K, C>
where
    S: Store,
    C: Codec<Type = V>,
    K: Into<Path> + Clone,
{
    #[inline]
    pub fn new(store: S) -> Self {
        Self {
            store,
            _codec: PhantomData,
            _key: PhantomData,
        }
    }

    fn length_path(prefix: &K) -> Path {
        let prefix: Path = prefix.clone().into();
        prefix.join(&[QUEUE_LENGTH_KEY])
    }

    fn element_path(prefix: &K, index: u64) -> Path {
        let prefix: Path = prefix.clone().into();
        let mut suffix = vec![QUEUE_ELEMENT_KEY];
        suffix.extend_from_slice(&index.to_be_bytes());
        prefix.join(&suffix)
    }

    /// The number of values ever pushed onto the queue at `prefix`.
    #[inline]
    pub fn len(&self, prefix: &K) -> u64 {
        self.store
            .get(&Self::length_path(prefix))
            .and_then(|v| U64Codec::decode(&v))
            .unwrap_or_default()
    }

    #[inline]
    pub fn is_empty(&self, prefix: &K) -> bool {
        self.len(prefix) == 0
    }

    /// Appends `value` to the queue at `prefix` and returns its index.
    ///
    /// # Panics
    ///
    /// Panics if `value` cannot be encoded.
    pub fn push(&mut self, prefix: &K, value: V) -> Result<u64, S::Error> {
        let index = self.len(prefix);
        let Some(encoded) = C::encode(&value) else {
            panic!("value pushed at index {index} cannot be encoded");
        };

        self.store
            .set(Self::element_path(prefix, index), encoded.as_ref().to_vec())?;
        self.store.set(
            Self::length_path(prefix),
            (index + 1).to_be_bytes().to_vec(),
        )?;

        Ok(index)
    }

    /// The value stored at `index` of the queue at `prefix`.
    #[inline]
    pub fn get(&self, prefix: &K, index: u64) -> Option<V> {
        self.store
            .get(&Self::element_path(prefix, index))
            .and_then(|v| C::decode(&v))
    }

    /// All values of the queue at `prefix`, in push order.
    pub fn values(&self, prefix: &K) -> Vec<V> {
        (0..self.len(prefix))
            .filter_map(|index| self.get(prefix, index))
            .collect()
    }
}
