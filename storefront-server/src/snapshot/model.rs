use serde::{Deserialize, Serialize};
use shared::models::{Branch, MenuItem, Promotion, RestaurantSettings};

/// 店面数据快照
///
/// 调用方持有的只读数据：设置、分店、促销、菜单。
/// 所有字段缺省为空，部分文件也能加载。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontSnapshot {
    pub settings: RestaurantSettings,
    pub branches: Vec<Branch>,
    pub promotions: Vec<Promotion>,
    pub menu: Vec<MenuItem>,
}

impl StorefrontSnapshot {
    pub fn find_branch(&self, id: i64) -> Option<&Branch> {
        self.branches.iter().find(|b| b.id == id)
    }

    /// Active branches ordered by display_order, then id
    pub fn active_branches(&self) -> Vec<&Branch> {
        let mut branches: Vec<&Branch> = self.branches.iter().filter(|b| b.is_active).collect();
        branches.sort_by_key(|b| (b.display_order, b.id));
        branches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document() {
        let snapshot: StorefrontSnapshot =
            serde_json::from_str(r#"{"branches":[{"id":2,"name":"Kamppi"}]}"#).unwrap();
        assert_eq!(snapshot.branches.len(), 1);
        assert!(snapshot.promotions.is_empty());
        assert!(snapshot.find_branch(2).is_some());
        assert!(snapshot.find_branch(3).is_none());
    }

    #[test]
    fn test_active_branches_order() {
        let snapshot: StorefrontSnapshot = serde_json::from_str(
            r#"{"branches":[
                {"id":1,"name":"A","display_order":2},
                {"id":2,"name":"B","display_order":1},
                {"id":3,"name":"C","display_order":0,"is_active":false}
            ]}"#,
        )
        .unwrap();
        let ids: Vec<i64> = snapshot.active_branches().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
