//! ailp tutorials コマンド
//!
//! フォルダ未指定ならフォルダ一覧と最新動画、指定ありならフォルダ内の動画を絞り込んで表示する。

use super::AppContext;
use crate::catalog::{EntryId, Folder, Video};
use crate::display::IconKind;
use crate::error::RichError;
use crate::filter::Selector;
use crate::output::{self, new_table, EMPTY_VIDEOS};
use crate::state::{TutorialNav, VIDEO_CATEGORIES, VIDEO_LEVELS};
use clap::Parser;
use serde::Serialize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Open a folder by ID
    #[arg(long, value_name = "ID")]
    pub folder: Option<EntryId>,

    /// Filter by video category
    #[arg(long, requires = "folder", value_parser = VIDEO_CATEGORIES.to_vec())]
    pub category: Option<String>,

    /// Filter by difficulty level
    #[arg(long, requires = "folder", value_parser = VIDEO_LEVELS.to_vec())]
    pub level: Option<String>,

    /// Case-insensitive search in title and description
    #[arg(long, requires = "folder")]
    pub search: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FolderListing<'a> {
    folders: &'a [Folder],
    latest: Vec<&'a Video>,
}

#[derive(Debug, Serialize)]
struct FolderDetail<'a> {
    folder: &'a Folder,
    videos: Vec<&'a Video>,
}

pub fn run(args: Args, ctx: &AppContext) -> Result<(), RichError> {
    let catalog = &ctx.catalog;
    let mut nav = TutorialNav::new(ctx.config.latest_videos);

    let Some(folder_id) = args.folder else {
        let latest = nav.visible_videos(catalog);
        if args.json {
            return output::print_json(&FolderListing {
                folders: &catalog.folders,
                latest,
            });
        }
        output::print_heading("教程", &nav.header_label(catalog));
        print_folders(&catalog.folders);
        println!("最新视频");
        print_videos(&latest);
        return Ok(());
    };

    nav.open_folder(catalog, folder_id)?;
    if let Some(category) = &args.category {
        nav.set_category(Selector::parse(category));
    }
    if let Some(level) = &args.level {
        nav.set_level(Selector::parse(level));
    }
    if let Some(search) = args.search {
        nav.set_search(search);
    }

    let videos = nav.visible_videos(catalog);
    let folder = catalog.require_folder(folder_id)?;

    if args.json {
        return output::print_json(&FolderDetail { folder, videos });
    }

    output::print_heading("教程", &nav.header_label(catalog));
    if videos.is_empty() {
        output::print_empty(EMPTY_VIDEOS);
    } else {
        print_videos(&videos);
    }
    Ok(())
}

fn print_folders(folders: &[Folder]) {
    let mut table = new_table(vec!["ID", "", "Folder", "Description", "Videos"]);
    for folder in folders {
        table.add_row(vec![
            folder.id.to_string(),
            IconKind::from_key(&folder.icon).glyph().to_string(),
            folder.name.clone(),
            output::truncate(&folder.description, 30),
            folder.count.to_string(),
        ]);
    }
    println!("{table}");
}

fn print_videos(videos: &[&Video]) {
    let mut table = new_table(vec!["ID", "Title", "Category", "Level", "Duration", "Views"]);
    for video in videos {
        table.add_row(vec![
            video.id.to_string(),
            video.title.clone(),
            video.category.clone(),
            video.level.clone(),
            video.duration.clone(),
            video.views.clone(),
        ]);
    }
    println!("{table}");
}
