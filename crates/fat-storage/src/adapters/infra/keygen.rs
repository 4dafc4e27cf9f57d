use uuid::Uuid;

use crate::domain::entities::BlockRef;
use crate::ports::outbound::KeyGenerator;

/// Random v4 UUID block keys.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidKeyGenerator;

impl KeyGenerator for UuidKeyGenerator {
    fn next_key(&self) -> BlockRef {
        BlockRef::new(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let generator = UuidKeyGenerator;
        let keys: HashSet<BlockRef> = (0..1000).map(|_| generator.next_key()).collect();
        assert_eq!(keys.len(), 1000);
    }
}
