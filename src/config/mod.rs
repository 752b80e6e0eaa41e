// src/config/mod.rs
//! レイアウト定数と、実行時に変えられる小さなオプション。

pub mod layout;

use serde::{Deserialize, Serialize};

/// ゲームのオプション。JS 側から JSON で渡せるようにしてあるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameOptions {
    /// 山札が空の時に山札をクリックしたら、捨て札を裏向きで山札に戻す。
    /// デフォルトは `false` (空の山札をクリックしても何も起きない)。
    #[serde(default)]
    pub recycle_waste: bool,
}
