/*!

This is the long-form manual for `draft_stats` and `draftboard`.

## Input format

The draft table has one row per pick and a header row naming the columns.
The columns may come in any order:

| column         | content                                                    |
|----------------|------------------------------------------------------------|
| `season`       | the year of the draft, for example `1973`                  |
| `pick_overall` | the overall pick number, `no pick` or empty                |
| `player`       | the full name of the player                                |
| `position`     | a short code, for example `QB`                             |
| `college`      | the college of the player                                  |
| `notes`        | free text                                                  |
| `hall_of_fame` | `1` for members of the Hall of Fame, anything else for no  |

All the values are read as text. Nothing is rejected: a value that cannot be
understood simply does not count.

### `csv`

Comma separated values, with double quotes around fields that contain commas.
This is the default.

### `csv_naive`

Each line is split on every comma, with no quoting. A `notes` field with a comma
in it shifts the `hall_of_fame` column of that row. This is kept to reproduce
the numbers of the earlier dashboard.

### `xlsx`

An Excel workbook. The first worksheet is read unless `--excel-worksheet-name`
is given. Whole numbers such as `1.0` are read as `1`.

## Counting rules

- A *real pick* has a non-empty `pick_overall` which is not `no pick` (in any case).
- Rows whose player starts with `Carl Eller` are a known misattribution and
  are left out of everything.
- A *Hall-of-Famer pick* is a real pick with `hall_of_fame` equal to 1.
- The college and position tables count every row with a value, real pick or not.
- The best pick of a season is the smallest pick number of that season. On a
  tie, the first row wins. A real pick always replaces a `no pick` marker.

## Command line

```bash
draftboard -i picks.csv --season 1985 --college "Virginia Tech" -o summary.json
```

`--dimension college --key LSU` is the same as `--college LSU`. The dimension
name is `college` or `position`, in lowercase.

The summary can be checked against a previous one with `-r reference.json`.
The differences are printed and the command fails when they do not match.

### Configuration

```json
{
  "outputSettings": {"dashboardTitle": "Bills", "outputPath": "summary.json"},
  "dataSource": {"provider": "csv", "filePath": "picks.csv"},
  "drillDown": {"hofPlayer": "Bruce Smith", "hofSeason": "1985"}
}
```

Paths are relative to the configuration file. The command line options take
precedence over the file.

### Report

```bash
draftboard report --title "Bills drafts" --content-file notes.txt --html report.html --markdown report.md
```

The report is saved in `project-report.json` (see `--state`) and loaded back on
the next run.

## Summary output

```text
{
  "config": {"title": ..., "source": ..., "provider": ..., "records": ...},
  "stats": {"total", "hofTotal", "distinctColleges", "distinctPositions",
            "byCollege", "byPosition", "hofPlayers", "seasonsSorted"},
  "pickSeries": [{"season", "pick", "player", "noPick"}, ...],
  "drillDown": {"season", "college", "position", "hallOfFame"}
}
```

*/
