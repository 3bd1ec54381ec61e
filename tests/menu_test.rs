use fanfold::{
    Easing, FanMenu, MenuAdapter, MenuConfig, MenuStatus, Orientation, SequenceKind,
    SequenceObserver, SlotStyle, SlotVisual,
};
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Minimal adapter over a fixed slot count, recording restyle calls.
struct CountingAdapter {
    count: usize,
    restyled: Rc<RefCell<Vec<(usize, SlotStyle)>>>,
}

impl MenuAdapter for CountingAdapter {
    fn count(&self) -> usize {
        self.count
    }

    fn build_slot(&mut self, position: usize) -> SlotVisual {
        SlotVisual {
            icon: position.to_string(),
            fill: egui::Color32::from_rgb(50, 50, 50),
            icon_color: egui::Color32::WHITE,
        }
    }

    fn restyle(&mut self, position: usize, style: SlotStyle, visual: &mut SlotVisual) {
        self.restyled.borrow_mut().push((position, style));
        visual.fill = match style {
            SlotStyle::Selected => egui::Color32::GOLD,
            SlotStyle::Normal => egui::Color32::from_rgb(50, 50, 50),
        };
    }
}

struct EventRecorder {
    events: Rc<RefCell<Vec<String>>>,
}

impl SequenceObserver for EventRecorder {
    fn on_sequence_start(&mut self, kind: SequenceKind) {
        self.events.borrow_mut().push(format!("start {:?}", kind));
    }

    fn on_sequence_end(&mut self, kind: SequenceKind) {
        self.events.borrow_mut().push(format!("end {:?}", kind));
    }
}

fn build_menu(
    count: usize,
    config: MenuConfig,
) -> (
    FanMenu,
    Rc<RefCell<Vec<(usize, SlotStyle)>>>,
    Rc<RefCell<Vec<String>>>,
) {
    let restyled = Rc::new(RefCell::new(Vec::new()));
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut menu = FanMenu::new(
        config,
        Box::new(CountingAdapter {
            count,
            restyled: restyled.clone(),
        }),
    );
    menu.set_observer(Box::new(EventRecorder {
        events: events.clone(),
    }));
    (menu, restyled, events)
}

/// Ticks until the sequence settles, returning the distinct animating slot
/// indices in the order they were observed.
fn run_to_completion(menu: &mut FanMenu) -> Vec<usize> {
    let mut order = Vec::new();
    let mut guard = 0;
    while menu.status() == MenuStatus::Animating {
        if let Some(slot) = menu.animating_slot() {
            if order.last() != Some(&slot) {
                order.push(slot);
            }
        }
        menu.tick(0.008);
        guard += 1;
        assert!(guard < 20_000, "sequence did not settle");
    }
    order
}

#[test]
fn test_full_cycle_orders_and_terminal_states() -> Result<()> {
    let (mut menu, _, events) = build_menu(4, MenuConfig::default());
    assert_eq!(menu.status(), MenuStatus::Open);

    menu.close();
    assert_eq!(run_to_completion(&mut menu), vec![3, 2, 1, 0]);
    assert_eq!(menu.status(), MenuStatus::Closed);

    menu.open();
    assert_eq!(run_to_completion(&mut menu), vec![0, 1, 2, 3]);
    assert_eq!(menu.status(), MenuStatus::Open);

    assert_eq!(
        *events.borrow(),
        vec!["start Close", "end Close", "start Open", "end Open"]
    );
    Ok(())
}

#[test]
fn test_reverse_mirrors_traversal() -> Result<()> {
    let config = MenuConfig {
        reverse: true,
        ..MenuConfig::default()
    };
    let (mut menu, _, _) = build_menu(5, config);

    menu.close_range(1, 3);
    // Mirrored close runs ascending over count-1-end .. count-1-start
    assert_eq!(run_to_completion(&mut menu), vec![1, 2, 3]);

    menu.open_range(1, 3);
    assert_eq!(run_to_completion(&mut menu), vec![3, 2, 1]);
    Ok(())
}

#[test]
fn test_observer_fires_exactly_once_per_sequence() -> Result<()> {
    let (mut menu, _, events) = build_menu(6, MenuConfig::default());

    menu.close();
    // Extra requests while animating must not add notifications
    menu.open();
    menu.close();
    run_to_completion(&mut menu);

    assert_eq!(*events.borrow(), vec!["start Close", "end Close"]);
    Ok(())
}

#[test]
fn test_trivial_sequences_settle_immediately() -> Result<()> {
    let (mut menu, _, events) = build_menu(3, MenuConfig::default());

    // Inverted after clamping: no slot animates, status still flips
    menu.close_range(2, 1);
    assert_eq!(menu.status(), MenuStatus::Closed);
    assert_eq!(*events.borrow(), vec!["start Close", "end Close"]);
    assert_eq!(menu.animating_slot(), None);
    Ok(())
}

#[test]
fn test_click_selection_swap_and_partial_close() -> Result<()> {
    let (mut menu, restyled, _) = build_menu(5, MenuConfig::default());
    menu.make_slot_selected(0);
    restyled.borrow_mut().clear();

    menu.notify_slot_clicked(2, Some((1, 3)));

    // New selection highlighted before the old one is restored
    assert_eq!(
        *restyled.borrow(),
        vec![(2, SlotStyle::Selected), (0, SlotStyle::Normal)]
    );
    assert_eq!(menu.selection().current_selected(), Some(2));
    assert_eq!(run_to_completion(&mut menu), vec![3, 2, 1]);
    assert_eq!(menu.status(), MenuStatus::Closed);
    Ok(())
}

#[test]
fn test_reclick_keeps_selection_without_restore() -> Result<()> {
    let (mut menu, restyled, _) = build_menu(3, MenuConfig::default());
    menu.notify_slot_clicked(1, None);
    restyled.borrow_mut().clear();

    menu.notify_slot_clicked(1, None);
    assert_eq!(*restyled.borrow(), vec![(1, SlotStyle::Selected)]);
    assert_eq!(menu.selection().current_selected(), Some(1));
    assert_eq!(menu.selection().previous_selected(), None);
    Ok(())
}

#[test]
fn test_horizontal_menu_full_cycle() -> Result<()> {
    let config = MenuConfig {
        orientation: Orientation::Horizontal,
        step_duration_ms: 20,
        easing: Easing::Linear,
        ..MenuConfig::default()
    };
    let (mut menu, _, _) = build_menu(3, config);

    menu.close();
    assert_eq!(run_to_completion(&mut menu), vec![2, 1, 0]);
    assert_eq!(menu.status(), MenuStatus::Closed);

    menu.open();
    assert_eq!(run_to_completion(&mut menu), vec![0, 1, 2]);
    assert_eq!(menu.status(), MenuStatus::Open);
    Ok(())
}

#[test]
fn test_only_one_sequence_in_flight() -> Result<()> {
    let (mut menu, _, events) = build_menu(4, MenuConfig::default());

    menu.close();
    let first = menu.animating_slot();
    menu.open_range(0, 2);
    // The rejected open left the running close untouched
    assert_eq!(menu.animating_slot(), first);

    run_to_completion(&mut menu);
    assert_eq!(menu.status(), MenuStatus::Closed);
    assert_eq!(events.borrow().len(), 2);
    Ok(())
}
