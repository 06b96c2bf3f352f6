//! End-to-end behaviour of column blocks through the markdown host.

use markdown_columns_engine::{
    Column, ColumnSession, Fragment, FragmentAction, Node, Platform, RenderEnv, Settings,
    parsing::parse_fragments, render_markdown, render_markdown_to_html,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn rendered_columns(markdown: &str, env: &RenderEnv) -> Vec<Column> {
    let doc = render_markdown(&mut ColumnSession::new(), markdown, env);
    doc.visible()
        .flat_map(|fragment| fragment.children.iter())
        .filter_map(|node| match node {
            Node::Column(col) => Some(col.clone()),
            _ => None,
        })
        .collect()
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
fn n_col_tags_give_n_plus_one_columns(#[case] cols: usize) {
    let mut md = String::from("[begin]\ncolumn 0\n");
    for i in 1..=cols {
        md.push_str(&format!("[col]\ncolumn {i}\n"));
    }
    md.push_str("[end]\n");

    let columns = rendered_columns(&md, &RenderEnv::default());

    assert_eq!(columns.len(), cols + 1);
    for (i, col) in columns.iter().enumerate() {
        assert_eq!(
            col.children,
            vec![Node::paragraph(vec![Node::text(format!("column {i}"))])]
        );
    }
}

#[test]
fn three_fragment_block_renders_once() {
    let md = "[begin]\n\nplain text\n\n[col]\nmore text\n[end]\n";
    let env = RenderEnv::default();
    let mut session = ColumnSession::new();
    let mut fragments = parse_fragments(md);
    assert_eq!(fragments.len(), 3);

    let actions: Vec<FragmentAction> = fragments
        .iter_mut()
        .map(|fragment| session.process(fragment, &env))
        .collect();

    assert_eq!(
        actions,
        vec![
            FragmentAction::Accumulate,
            FragmentAction::Accumulate,
            FragmentAction::Render,
        ]
    );
    assert!(fragments[0].is_empty());
    assert!(fragments[1].is_empty());
    assert_eq!(
        fragments[2].children,
        vec![
            Node::Column(Column {
                width: 1,
                wrap: false,
                children: vec![Node::paragraph(vec![Node::text("plain text")])],
            }),
            Node::Column(Column {
                width: 1,
                wrap: false,
                children: vec![Node::paragraph(vec![Node::text("more text")])],
            }),
        ]
    );
}

#[test]
fn line_break_split_places_lines_in_different_columns() {
    let md = "[begin]\n\nfoo\n[col]2\nbar\n\n[end]\n";

    let columns = rendered_columns(md, &RenderEnv::default());

    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].width, 1);
    assert_eq!(
        columns[0].children,
        vec![Node::paragraph(vec![Node::text("foo")])]
    );
    assert_eq!(columns[1].width, 2);
    assert_eq!(
        columns[1].children,
        vec![Node::paragraph(vec![Node::text("bar")])]
    );
}

#[rstest]
#[case("[begin]3", 3)]
#[case("[begin]", 1)]
#[case("[begin]abc", 1)]
#[case("[begin]0", 1)]
fn first_column_width(#[case] begin: &str, #[case] width: u32) {
    let md = format!("{begin}\nx\n[end]\n");
    let columns = rendered_columns(&md, &RenderEnv::default());
    assert_eq!(columns[0].width, width);
}

#[test]
fn rerendering_rendered_output_is_a_no_op() {
    let env = RenderEnv::default();
    let mut session = ColumnSession::new();
    let doc = render_markdown(&mut session, "[begin]\na\n[col]\nb\n[end]\n", &env);
    let mut rendered: Vec<Fragment> = doc.fragments.clone();

    for fragment in &mut rendered {
        assert_eq!(session.process(fragment, &env), FragmentAction::PassThrough);
    }

    assert_eq!(rendered, doc.fragments);
}

#[test]
fn duplicate_begin_renders_tags_literally() {
    let md = "[begin]\n\nleft\n\n[begin]\nright\n[end]\n";

    let html = render_markdown_to_html(md, &RenderEnv::default());

    assert_eq!(
        html,
        "<div><p>[begin]</p><p>left</p><p>[begin]<br>right<br>[end]</p></div>\n"
    );
}

#[test]
fn global_rtl_is_overridden_by_ltr_keyword() {
    let env = RenderEnv::new(
        Settings {
            rtl_by_default: true,
            ..Settings::default()
        },
        Platform::Desktop,
    );

    let rtl = render_markdown_to_html("[begin]\na\n[end]\n", &env);
    let ltr = render_markdown_to_html("[begin]\na\n[end] ltr\n", &env);

    assert!(rtl.starts_with("<div class=\"columns-parent columns-parent-rtl\">"));
    assert!(ltr.starts_with("<div class=\"columns-parent\">"));
}

#[test]
fn mobile_layout_can_be_disabled() {
    let env = RenderEnv::new(
        Settings {
            render_on_mobile: false,
            wrap_by_default: true,
            ..Settings::default()
        },
        Platform::Mobile,
    );

    let html = render_markdown_to_html("[begin]\na\n[col]\nb\n[end] rtl\n", &env);

    assert_eq!(
        html,
        "<div><div style=\"flex:1\"><p>a</p></div><div style=\"flex:1\"><p>b</p></div></div>\n"
    );
}

#[test]
fn wrap_by_default_on_mobile_when_enabled() {
    let env = RenderEnv::new(
        Settings {
            wrap_by_default: true,
            ..Settings::default()
        },
        Platform::Mobile,
    );

    let columns = rendered_columns("[begin]\na\n[col]\nb\n[end]\n", &env);

    assert!(columns.iter().all(|col| col.wrap));
}

#[test]
fn text_outside_blocks_is_untouched() {
    let md = "Intro with [col] in the middle.\n\n> quoted [end]\n";

    let html = render_markdown_to_html(md, &RenderEnv::default());

    assert_eq!(
        html,
        "<div><p>Intro with [col] in the middle.</p></div>\n<div><blockquote><p>quoted [end]</p></blockquote></div>\n"
    );
}
