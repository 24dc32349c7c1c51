/// UI layout macros for ergonomic view construction

/// Create a spacer element for vertical/horizontal gaps
///
/// # Examples
/// ```ignore
/// spacer!()     // 1 line gap
/// spacer!(3)    // 3 line gap
/// ```
#[macro_export]
macro_rules! spacer {
    () => {
        $crate::tui::Element::text("")
    };
    ($height:expr) => {{
        let items: Vec<_> = (0..$height)
            .map(|_| {
                (
                    $crate::tui::LayoutConstraint::Length(1),
                    $crate::tui::Element::text(""),
                )
            })
            .collect();
        $crate::tui::element::ColumnBuilder::from_items(items)
            .spacing(0)
            .build()
    }};
}

/// Create a vertical column layout
///
/// # Examples
/// ```ignore
/// // Simple: all children get Fill(1) constraint
/// col![
///     Element::text("Header"),
///     Element::text("Body"),
/// ]
///
/// // With explicit constraints using => syntax
/// col![
///     Element::text("Header") => Length(1),
///     list => Fill(1),
/// ]
/// ```
#[macro_export]
macro_rules! col {
    // Without constraints - use Fill(1) default
    [ $($child:expr),* $(,)? ] => {{
        let mut builder = $crate::tui::element::ColumnBuilder::new();
        $(
            builder = builder.add($child, $crate::tui::LayoutConstraint::Fill(1));
        )*
        builder.build()
    }};

    // With explicit constraints using => syntax
    [ $($child:expr => $constraint:expr),* $(,)? ] => {{
        let mut builder = $crate::tui::element::ColumnBuilder::new();
        $(
            builder = builder.add($child, $constraint);
        )*
        builder.build()
    }};
}

/// Create a horizontal row layout
///
/// # Examples
/// ```ignore
/// row![
///     sidebar => Length(30),
///     content => Fill(1),
/// ]
/// ```
#[macro_export]
macro_rules! row {
    // Without constraints - use Fill(1) default
    [ $($child:expr),* $(,)? ] => {{
        let mut builder = $crate::tui::element::RowBuilder::new();
        $(
            builder = builder.add($child, $crate::tui::LayoutConstraint::Fill(1));
        )*
        builder.build()
    }};

    // With explicit constraints using => syntax
    [ $($child:expr => $constraint:expr),* $(,)? ] => {{
        let mut builder = $crate::tui::element::RowBuilder::new();
        $(
            builder = builder.add($child, $constraint);
        )*
        builder.build()
    }};
}

/// Import all layout constraint types for shorter syntax
///
/// # Example
/// ```ignore
/// use_constraints!();
/// col![
///     header => Length(3),
///     body => Fill(1),
/// ]
/// ```
#[macro_export]
macro_rules! use_constraints {
    () => {
        #[allow(unused_imports)]
        use $crate::tui::LayoutConstraint::{Fill, Length, Min};
    };
}
