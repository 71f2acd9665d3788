// src/game.rs

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::card::{Card, CardId};
use crate::components::deck::Deck;
use crate::components::game_state::{EnginePhase, GameStatus};
use crate::components::pile::Pile;
use crate::components::stack::{Location, PileId};
use crate::components::undo_log::{UndoLog, UndoRecord};
use crate::config::rules::DECK_SIZE;
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::logic::auto_move::{find_automatic_foundation_move, resolve_target};
use crate::protocol::{GameEvent, PlacementResult, Run, SavedGame};
use crate::systems::{
    DealInitialCardsSystem, MoveCardSystem, Selection, StockSystem, UndoSystem, WinConditionSystem,
};
use crate::world::World;

/// 1ゲーム分の全部を持ってる構造体だよ！🎮
///
/// テーブル (`World`)、選択中の run、Undo 記録、UI 向けのイベントキュー。
/// 操作は全部ここを通す。どの操作も、全部反映されるか、何も変わらないかのどちらか。
#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    config: GameConfig,
    status: GameStatus,
    selection: Option<Selection>,
    undo_log: UndoLog,
    original_deal: Option<Deck>,
    events: VecDeque<GameEvent>,
}

impl Game {
    // --- ゲームの開始 ---

    /// シャッフルしたデッキで新しいゲームを始める。
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        Self::from_deck(config, Deck::shuffled())
    }

    /// シードを固定して配る。同じシードなら同じ配りになるよ。
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, EngineError> {
        Self::from_deck(config, Deck::shuffled_with(&mut StdRng::seed_from_u64(seed)))
    }

    /// 並びを指定したデッキから配る。
    pub fn from_deck(config: GameConfig, deck: Deck) -> Result<Self, EngineError> {
        config.validate()?;
        let mut game = Game {
            world: World::default(),
            config,
            status: GameStatus::Playing,
            selection: None,
            undo_log: UndoLog::new(),
            original_deal: None,
            events: VecDeque::new(),
        };
        game.start(deck)?;
        Ok(game)
    }

    fn start(&mut self, deck: Deck) -> Result<(), EngineError> {
        let snapshot = deck.snapshot();
        self.world = DealInitialCardsSystem.execute(deck)?;
        self.original_deal = Some(snapshot);
        self.status = GameStatus::Playing;
        self.selection = None;
        self.undo_log.clear();
        self.events.clear();
        log::info!("[Game] New game started (draw {}).", self.config.draw_count);
        Ok(())
    }

    /// 新しいゲーム。`reshuffle` が false なら前と同じ配りでもう一回。
    pub fn new_game(&mut self, reshuffle: bool) -> Result<(), EngineError> {
        let deck = match (&self.original_deal, reshuffle) {
            (Some(original), false) => original.snapshot(),
            _ => Deck::shuffled(),
        };
        self.start(deck)
    }

    pub fn new_game_seeded(&mut self, seed: u64) -> Result<(), EngineError> {
        self.start(Deck::shuffled_with(&mut StdRng::seed_from_u64(seed)))
    }

    /// 設定を変える。めくる枚数は次のタップから反映されるよ。
    pub fn set_config(&mut self, config: GameConfig) -> Result<(), EngineError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    // --- 選択と配置 ---

    /// `pile` の `card` から上の run を持ち上げる。
    pub fn select_run(&mut self, pile: PileId, card: CardId) -> Result<Run, EngineError> {
        self.ensure_playing()?;
        if self.selection.is_some() {
            return Err(EngineError::SelectionActive);
        }
        let selection = MoveCardSystem.lift(&mut self.world, pile, card, self.config.draw_count)?;
        let run = Run { source: selection.source, cards: selection.cards.clone() };
        self.selection = Some(selection);
        Ok(run)
    }

    /// 持ち上げ中の run を `target` に置く。
    ///
    /// ルール上置けなかったら `success: false` で、run は元の場所に戻る。
    /// 元の山を指定したらキャンセル扱い。
    pub fn attempt_place(&mut self, target: PileId) -> Result<PlacementResult, EngineError> {
        self.ensure_playing()?;
        let selection = self.selection.take().ok_or(EngineError::NoSelection)?;
        if selection.source == target {
            let source = selection.source;
            MoveCardSystem.return_to_source(&mut self.world, selection)?;
            return Ok(PlacementResult::failed(source));
        }
        self.commit(selection, target)
    }

    /// 持ち上げ中の run の置き場所を自動で決めて置く。組札が先、次に場札を左から。
    pub fn auto_place(&mut self) -> Result<PlacementResult, EngineError> {
        self.ensure_playing()?;
        let selection = self.selection.take().ok_or(EngineError::NoSelection)?;
        match resolve_target(&self.world, &selection.cards, selection.source) {
            Some(target) => self.commit(selection, target),
            None => {
                let source = selection.source;
                log::debug!("[Game] No target found for {} card(s) from {}.", selection.cards.len(), source);
                MoveCardSystem.return_to_source(&mut self.world, selection)?;
                Ok(PlacementResult::failed(source))
            }
        }
    }

    /// 持ち上げ中の run を元に戻す。何も持ってなければ false。
    pub fn cancel_selection(&mut self) -> Result<bool, EngineError> {
        match self.selection.take() {
            Some(selection) => {
                MoveCardSystem.return_to_source(&mut self.world, selection)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn commit(&mut self, selection: Selection, target: PileId) -> Result<PlacementResult, EngineError> {
        let source = selection.source;
        match MoveCardSystem.place(&mut self.world, selection, target) {
            Ok(placement) => {
                self.record(placement.record);
                if let Some(card) = &placement.revealed {
                    self.events.push_back(GameEvent::CardRevealed { pile: source, card: card.clone() });
                }
                self.check_win();
                Ok(PlacementResult {
                    success: true,
                    source,
                    destination: Some(target),
                    revealed_card: placement.revealed,
                })
            }
            Err((error, selection)) => {
                MoveCardSystem.return_to_source(&mut self.world, selection)?;
                match error {
                    EngineError::IllegalMove { .. } => Ok(PlacementResult::failed(source)),
                    other => Err(other),
                }
            }
        }
    }

    // --- 山札と捨て札 ---

    /// 山札をタップ。設定の枚数だけ捨て札にめくって、めくったカードを返すよ。
    pub fn tap_stock(&mut self) -> Result<Vec<Card>, EngineError> {
        self.ensure_idle()?;
        let record = StockSystem.deal_from_stock(&mut self.world, self.config.draw_count)?;
        let dealt = self.world.waste().fanned(record.cards.len()).to_vec();
        self.record(record);
        Ok(dealt)
    }

    /// 山札が空の時に捨て札を全部山札に戻す。
    pub fn tap_waste(&mut self) -> Result<(), EngineError> {
        self.ensure_idle()?;
        let record = StockSystem.reset_waste_to_stock(&mut self.world)?;
        self.record(record);
        Ok(())
    }

    // --- 組札への自動移動 ---

    /// そのカードを今すぐ置ける組札。一番上の表向きのカードじゃないと None。
    pub fn find_foundation_target(&self, card: CardId) -> Option<PileId> {
        let location = self.world.location_of(card)?;
        if matches!(location.pile, PileId::Stock | PileId::Foundation(_)) {
            return None;
        }
        let top = self.world.top_card(location.pile)?;
        if top.id() != card || !top.is_face_up() {
            return None;
        }
        find_automatic_foundation_move(&self.world, top)
    }

    /// タップしたカードを組札に送る。送れなければ `success: false`。
    pub fn send_to_foundation(&mut self, card: CardId) -> Result<PlacementResult, EngineError> {
        self.ensure_idle()?;
        let location = self
            .world
            .location_of(card)
            .ok_or_else(|| EngineError::InvalidState(format!("card {:?} is not on the table", card)))?;
        match self.find_foundation_target(card) {
            Some(target) => {
                let selection = MoveCardSystem.lift(&mut self.world, location.pile, card, self.config.draw_count)?;
                self.commit(selection, target)
            }
            None => Ok(PlacementResult::failed(location.pile)),
        }
    }

    /// 残りを全部自動で組札に送れる状態か。
    /// 山札も捨て札も空で、場札に裏向きのカードが残ってないこと。
    pub fn can_auto_finish(&self) -> bool {
        self.status == GameStatus::Playing
            && self.selection.is_none()
            && self.world.stock().is_empty()
            && self.world.waste().is_empty()
            && self.world.tableaus().iter().all(|t| t.buried().is_empty())
    }

    /// 残りのカードを全部組札に送る。1枚ずつ普通の移動として記録されるよ。
    /// 送った枚数を返す (できない状態なら 0)。
    pub fn auto_finish(&mut self) -> Result<usize, EngineError> {
        if !self.can_auto_finish() {
            return Ok(0);
        }
        let mut moved = 0;
        while self.status == GameStatus::Playing {
            let next = self
                .world
                .tableaus()
                .iter()
                .filter_map(|t| t.top())
                .map(Card::id)
                .find(|&id| self.find_foundation_target(id).is_some());
            let Some(card) = next else {
                break;
            };
            if self.send_to_foundation(card)?.success {
                moved += 1;
            }
        }
        log::info!("[Game] Auto-finished {} card(s).", moved);
        Ok(moved)
    }

    // --- Undo ---

    /// 1手戻す。記録がなければ何もしないで false。
    pub fn undo(&mut self) -> Result<bool, EngineError> {
        self.ensure_idle()?;
        let Some(record) = self.undo_log.pop() else {
            return Ok(false);
        };
        if let Err(error) = UndoSystem.undo(&mut self.world, &record) {
            self.undo_log.push(record);
            return Err(error);
        }
        self.events.push_back(GameEvent::MoveUndone {
            kind: record.kind,
            undo_available: !self.undo_log.is_empty(),
        });
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        self.status == GameStatus::Playing && self.selection.is_none() && !self.undo_log.is_empty()
    }

    // --- 問い合わせ ---

    pub fn location_of(&self, card: CardId) -> Option<Location> {
        self.world.location_of(card)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn phase(&self) -> EnginePhase {
        if self.selection.is_some() {
            EnginePhase::SelectionActive
        } else {
            EnginePhase::Idle
        }
    }

    /// 持ち上げ中の run。
    pub fn selection(&self) -> Option<Run> {
        self.selection.as_ref().map(|s| Run { source: s.source, cards: s.cards.clone() })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// 溜まったイベントを古い順に全部取り出す。
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// 52枚がそろってるか (手に持ってる分も含めて) チェックする。
    pub fn check_invariants(&self) -> Result<(), EngineError> {
        let held = self.selection.as_ref().map_or(&[][..], |s| s.cards.as_slice());
        self.world.check_invariants(held)
    }

    // --- セーブとロード ---

    /// 今の状態を保存用に書き出す。選択中は保存できないよ。
    pub fn save_state(&self) -> Result<SavedGame, EngineError> {
        if self.selection.is_some() {
            return Err(EngineError::SelectionActive);
        }
        Ok(SavedGame {
            config: self.config,
            status: self.status,
            world: self.world.clone(),
            undo_log: self.undo_log.clone(),
            original_deal: self.original_deal.clone(),
        })
    }

    /// 保存データからゲームを復元する。中身がおかしければ InvalidState。
    pub fn restore(saved: SavedGame) -> Result<Self, EngineError> {
        let SavedGame { config, status, mut world, undo_log, original_deal } = saved;
        config.validate()?;
        world.validate_restored()?;
        if let Some(deal) = &original_deal {
            if !deal.drawn().is_empty() {
                return Err(EngineError::InvalidState("original deal has drawn cards".to_string()));
            }
            Deck::from_order(deal.undrawn().to_vec())?;
        }
        let solved = world.foundation_card_count() == DECK_SIZE;
        if solved != (status == GameStatus::Won) {
            return Err(EngineError::InvalidState(format!("status {:?} does not match the table", status)));
        }
        log::info!("[Game] Restored a saved game with {} undo record(s).", undo_log.len());
        Ok(Game {
            world,
            config,
            status,
            selection: None,
            undo_log,
            original_deal,
            events: VecDeque::new(),
        })
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        let saved = self.save_state()?;
        serde_json::to_string(&saved).map_err(|e| EngineError::InvalidState(format!("cannot serialize game: {}", e)))
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let saved: SavedGame =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidState(format!("bad saved game JSON: {}", e)))?;
        Self::restore(saved)
    }

    // --- 内部 ---

    fn ensure_playing(&self) -> Result<(), EngineError> {
        match self.status {
            GameStatus::Playing => Ok(()),
            GameStatus::Won => Err(EngineError::GameOver),
        }
    }

    fn ensure_idle(&self) -> Result<(), EngineError> {
        self.ensure_playing()?;
        if self.selection.is_some() {
            return Err(EngineError::SelectionActive);
        }
        Ok(())
    }

    fn record(&mut self, record: UndoRecord) {
        let kind = record.kind;
        self.undo_log.push(record);
        self.events.push_back(GameEvent::MoveRecorded { kind, undo_available: true });
    }

    fn check_win(&mut self) {
        if WinConditionSystem.run(&self.world, &mut self.status) {
            self.events.push_back(GameEvent::GameWon);
        }
    }
}
