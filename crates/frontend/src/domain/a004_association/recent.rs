use contracts::domain::a004_association::RecentAssociation;

pub const RECENT_LIMIT: usize = 5;

/// Newest first, capped at [`RECENT_LIMIT`].
pub fn push_recent(list: &mut Vec<RecentAssociation>, item: RecentAssociation) {
    list.insert(0, item);
    list.truncate(RECENT_LIMIT);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assoc(qr: &str) -> RecentAssociation {
        RecentAssociation {
            qr: qr.to_string(),
            operator: "Ana".to_string(),
            timestamp: "10:00:00".to_string(),
        }
    }

    #[test]
    fn test_newest_first() {
        let mut list = Vec::new();
        push_recent(&mut list, assoc("1"));
        push_recent(&mut list, assoc("2"));
        assert_eq!(list[0].qr, "2");
        assert_eq!(list[1].qr, "1");
    }

    #[test]
    fn test_capped_at_five() {
        let mut list = Vec::new();
        for i in 0..8 {
            push_recent(&mut list, assoc(&i.to_string()));
        }
        assert_eq!(list.len(), RECENT_LIMIT);
        assert_eq!(list[0].qr, "7");
        assert_eq!(list[4].qr, "3");
    }
}
