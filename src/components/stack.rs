// src/components/stack.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// カードが存在する場所の種類を示す Enum だよ。
/// 場札と組札は番号 (0 始まり) で区別する。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau)。7つの列があるので列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation)。4つあるので番号 (0-3) を持つ。
    /// どのスートを積むかは最初に置かれた A で決まるよ。
    Foundation(u8),
    /// 山札からめくったカードを置く場所。
    Waste,
    /// 山札 (Stock)。プレイヤーがカードを置くことはできない。
    Stock,
}

impl StackType {
    /// プレイヤーがここからカードを持ち上げられるか。
    pub fn is_selectable_source(self) -> bool {
        matches!(self, StackType::Tableau(_) | StackType::Waste)
    }

    /// ドロップ先になれるか。
    pub fn is_drop_target(self) -> bool {
        matches!(self, StackType::Tableau(_) | StackType::Foundation(_))
    }
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackType::Tableau(i) => write!(f, "Tableau({})", i),
            StackType::Foundation(i) => write!(f, "Foundation({})", i),
            StackType::Waste => write!(f, "Waste"),
            StackType::Stock => write!(f, "Stock"),
        }
    }
}
