//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use crate::config::rules::MAX_DRAW_COUNT;

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// ストック（山札）が空のときに、ウェスト（捨て札）からストックにカードを戻せるかチェックする。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}

/// 捨て札が受け取れる枚数か。山札から1回にめくるのは1〜3枚。
pub fn is_deal_size(run_len: usize) -> bool {
    (1..=MAX_DRAW_COUNT).contains(&run_len)
}
