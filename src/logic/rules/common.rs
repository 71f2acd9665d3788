//! ルール判定で共通して使うヘルパー関数を置くよ。

use itertools::Itertools;

use crate::components::card::Card;

/// 2枚のカードの色が違うか (赤と黒)。
pub fn colors_differ(a: &Card, b: &Card) -> bool {
    a.color() != b.color()
}

/// `lower` が `upper` のちょうど1つ下のランクか。
pub(crate) fn is_one_rank_below(lower: &Card, upper: &Card) -> bool {
    lower.rank.value() + 1 == upper.rank.value()
}

/// run の中身が場札のルール通りに並んでるかチェックする。
///
/// 全部表向きで、上に行くほどランクが1つずつ下がって、色が交互になってること。
/// 1枚だけの run は (表向きなら) いつでも OK。
pub fn is_valid_run(run: &[Card]) -> bool {
    if run.iter().any(|card| !card.is_face_up()) {
        return false;
    }
    run.iter()
        .tuple_windows()
        .all(|(below, above)| is_one_rank_below(above, below) && colors_differ(above, below))
}

