use crate::tui::element::FocusId;
use crate::tui::renderer::{DropdownRegistry, FocusRegistry, InteractionRegistry};
use crate::tui::{Element, LayoutConstraint, Theme};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Calculate ratatui Constraints from our LayoutConstraints
pub fn calculate_constraints<Msg>(
    items: &[(LayoutConstraint, Element<Msg>)],
    available_space: u16,
) -> Vec<Constraint> {
    // Pass 1: Calculate fixed and minimum sizes
    let mut fixed_total = 0u16;
    let mut fill_total_weight = 0u16;

    for (constraint, _) in items {
        match constraint {
            LayoutConstraint::Length(n) => fixed_total += n,
            LayoutConstraint::Min(n) => fixed_total += n,
            LayoutConstraint::Fill(weight) => fill_total_weight += weight,
        }
    }

    // Pass 2: Calculate remaining space for Fill elements
    let remaining = available_space.saturating_sub(fixed_total);

    // Pass 3: Build ratatui constraints
    items
        .iter()
        .map(|(constraint, _)| match constraint {
            LayoutConstraint::Length(n) => Constraint::Length(*n),
            LayoutConstraint::Min(n) => Constraint::Min(*n),
            LayoutConstraint::Fill(weight) => {
                if fill_total_weight > 0 {
                    // Proportional share of the remaining space
                    let space =
                        (remaining as u32 * *weight as u32 / fill_total_weight as u32) as u16;
                    Constraint::Length(space)
                } else {
                    Constraint::Length(0)
                }
            }
        })
        .collect()
}

/// Render Column element
pub fn render_column<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    theme: &Theme,
    registry: &mut InteractionRegistry<Msg>,
    focus_registry: &mut FocusRegistry<Msg>,
    dropdown_registry: &mut DropdownRegistry<Msg>,
    focused_id: Option<&FocusId>,
    items: &[(LayoutConstraint, Element<Msg>)],
    area: Rect,
    inside_panel: bool,
    render_fn: impl Fn(
        &mut Frame,
        &Theme,
        &mut InteractionRegistry<Msg>,
        &mut FocusRegistry<Msg>,
        &mut DropdownRegistry<Msg>,
        Option<&FocusId>,
        &Element<Msg>,
        Rect,
        bool,
    ),
) {
    if items.is_empty() {
        return;
    }

    let constraints = calculate_constraints(items, area.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for ((_, child), chunk) in items.iter().zip(chunks.iter()) {
        render_fn(
            frame,
            theme,
            registry,
            focus_registry,
            dropdown_registry,
            focused_id,
            child,
            *chunk,
            inside_panel,
        );
    }
}

/// Render Row element
pub fn render_row<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    theme: &Theme,
    registry: &mut InteractionRegistry<Msg>,
    focus_registry: &mut FocusRegistry<Msg>,
    dropdown_registry: &mut DropdownRegistry<Msg>,
    focused_id: Option<&FocusId>,
    items: &[(LayoutConstraint, Element<Msg>)],
    area: Rect,
    inside_panel: bool,
    render_fn: impl Fn(
        &mut Frame,
        &Theme,
        &mut InteractionRegistry<Msg>,
        &mut FocusRegistry<Msg>,
        &mut DropdownRegistry<Msg>,
        Option<&FocusId>,
        &Element<Msg>,
        Rect,
        bool,
    ),
) {
    if items.is_empty() {
        return;
    }

    let constraints = calculate_constraints(items, area.width);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for ((_, child), chunk) in items.iter().zip(chunks.iter()) {
        render_fn(
            frame,
            theme,
            registry,
            focus_registry,
            dropdown_registry,
            focused_id,
            child,
            *chunk,
            inside_panel,
        );
    }
}

/// Render Container element
pub fn render_container<Msg: Clone + Send + 'static>(
    frame: &mut Frame,
    theme: &Theme,
    registry: &mut InteractionRegistry<Msg>,
    focus_registry: &mut FocusRegistry<Msg>,
    dropdown_registry: &mut DropdownRegistry<Msg>,
    focused_id: Option<&FocusId>,
    child: &Element<Msg>,
    padding: u16,
    area: Rect,
    inside_panel: bool,
    render_fn: impl Fn(
        &mut Frame,
        &Theme,
        &mut InteractionRegistry<Msg>,
        &mut FocusRegistry<Msg>,
        &mut DropdownRegistry<Msg>,
        Option<&FocusId>,
        &Element<Msg>,
        Rect,
        bool,
    ),
) {
    // Apply padding by shrinking the area
    let padded_area = Rect {
        x: area.x + padding,
        y: area.y + padding,
        width: area.width.saturating_sub(padding * 2),
        height: area.height.saturating_sub(padding * 2),
    };
    render_fn(
        frame,
        theme,
        registry,
        focus_registry,
        dropdown_registry,
        focused_id,
        child,
        padded_area,
        inside_panel,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_splits_remaining_space_by_weight() {
        let items: Vec<(LayoutConstraint, Element<u32>)> = vec![
            (LayoutConstraint::Length(4), Element::None),
            (LayoutConstraint::Fill(1), Element::None),
            (LayoutConstraint::Fill(3), Element::None),
        ];
        let constraints = calculate_constraints(&items, 20);
        assert_eq!(
            constraints,
            vec![
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(12),
            ]
        );
    }

    #[test]
    fn overcommitted_fixed_space_saturates() {
        let items: Vec<(LayoutConstraint, Element<u32>)> = vec![
            (LayoutConstraint::Length(30), Element::None),
            (LayoutConstraint::Fill(1), Element::None),
        ];
        let constraints = calculate_constraints(&items, 20);
        assert_eq!(
            constraints,
            vec![Constraint::Length(30), Constraint::Length(0)]
        );
    }
}
