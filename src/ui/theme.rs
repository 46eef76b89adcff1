use crossterm::style::{Attribute, Color};
use termimad::{MadSkin, StyledChar};

pub const ORCHID: Color = Color::Rgb { r: 181, g: 101, b: 216 }; // #B565D8
pub const ORCHID_LIGHT: Color = Color::Rgb { r: 232, g: 196, b: 240 }; // #E8C4F0
pub const SKY: Color = Color::Rgb { r: 135, g: 206, b: 235 }; // #87CEEB

pub const BANNER: &str = r#"
# Double Side Printing Page Order Generator

Enter the page count **N** (a positive multiple of 4) and press *Enter*.
Print the pages in the order shown, flip the stack, then reassemble.
Type `/help` for commands, `/exit` or *Ctrl-D* to quit.
"#;

pub const HELP: &str = r#"
**Commands**

* `/chunk [size]` show or set pages per line
* `/sep [text]` show or set the separator between pages
* `/format [text|json]` show or set the output format
* `/settings` show the active settings
* `/help` this list
* `/exit` quit
"#;

pub fn create_skin() -> MadSkin {
    let mut skin = MadSkin::default();

    skin.bold.set_fg(ORCHID);
    skin.headers[0].set_fg(ORCHID);
    skin.headers[0].add_attr(Attribute::Bold);

    skin.inline_code.set_fg(ORCHID_LIGHT);
    skin.inline_code.set_bg(Color::Rgb { r: 40, g: 40, b: 40 });

    skin.bullet = StyledChar::from_fg_char(SKY, '•');
    skin.italic.set_fg(SKY);

    skin
}
