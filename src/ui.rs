pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Check-in</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #fdf6fb;
      --bg-2: #e5eafc;
      --ink: #4d476a;
      --accent: #ff6b81;
      --accent-2: #5f8ef7;
      --ok: #24bb5f;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 18px 48px rgba(95, 142, 247, 0.16);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1) 60%, var(--bg-2) 120%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(620px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 20px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.9rem;
      margin: 0;
      text-align: center;
      color: var(--accent);
    }

    .progress-track {
      background: #f6e5fa;
      border-radius: 9px;
      height: 13px;
      overflow: hidden;
    }

    .progress-fill {
      height: 13px;
      border-radius: 9px;
      background: linear-gradient(90deg, #fcb6ef, #90e8fd 90%);
      transition: width .3s;
    }

    .progress-label { text-align: center; font-weight: 600; }
    .progress-label.done { color: var(--ok); }

    .week-nav {
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 12px;
      color: #888;
      font-weight: 600;
    }

    .week-nav button {
      border: none;
      background: none;
      color: var(--accent);
      font-size: 1.2rem;
      cursor: pointer;
    }

    .week-strip { display: flex; gap: 6px; }

    .week-day {
      flex: 1;
      border: 1.2px solid #eee;
      border-radius: 14px;
      background: #f8fafd;
      padding: 8px 0;
      text-align: center;
      font-weight: 600;
      cursor: pointer;
      font-size: .85rem;
    }

    .week-day.active {
      background: linear-gradient(120deg, #fda2c6 60%, #a5dfff 120%);
      color: #fff;
      border-color: #ff9eae;
    }

    .week-day .bar {
      height: 6px;
      width: 80%;
      margin: 4px auto 0;
      background: #e2e7fd;
      border-radius: 3px;
      overflow: hidden;
    }

    .week-day .bar div { height: 6px; background: #ff80a9; }
    .week-day .bar div.full { background: #14d897; }

    .tabs { display: flex; flex-wrap: wrap; gap: 8px; justify-content: center; }

    .tabs button {
      padding: 8px 18px;
      border-radius: 18px;
      border: none;
      background: #f6f7fb;
      color: #8a8a8a;
      font-weight: 600;
      cursor: pointer;
    }

    .tabs button.active { background: var(--accent); color: #fff; }
    .tabs button.add { border: 2px dashed var(--accent); background: none; color: var(--accent); }

    .task {
      display: flex;
      align-items: center;
      gap: 12px;
      border-radius: 16px;
      background: #fff;
      box-shadow: 0 3px 10px rgba(233, 226, 253, 0.5);
      padding: 12px 16px;
      margin: 10px 0;
      font-weight: 600;
    }

    .task.checked { background: linear-gradient(90deg, #d1ffe6 65%, #b6f3fa 120%); color: #149b74; }
    .task input[type=checkbox] { width: 22px; height: 22px; }
    .task .name { flex: 1; }
    .task.checked .name { text-decoration: line-through; }
    .task button { border: none; background: none; color: #f8638e; cursor: pointer; }

    .category-head { display: flex; justify-content: space-between; align-items: center; }
    .category-head .title { font-weight: 700; font-size: 1.2rem; color: var(--accent-2); }
    .category-head button { border: none; background: none; cursor: pointer; color: #888; font-weight: 600; }

    .add-task { display: flex; gap: 8px; margin-top: 10px; }
    .add-task input { flex: 1; border-radius: 10px; border: 1.5px solid var(--accent); padding: 8px 12px; }
    .add-task button { background: var(--accent); color: #fff; border: none; border-radius: 10px; padding: 6px 18px; cursor: pointer; }

    .panel { background: #f8fafd; border-radius: 18px; padding: 16px; }
    .panel h2 { margin: 0 0 10px; font-size: 1.05rem; }

    .stat-tabs { display: flex; gap: 8px; margin-bottom: 10px; }
    .stat-tabs button { border: none; border-radius: 12px; padding: 6px 14px; background: #eef1fb; cursor: pointer; font-weight: 600; color: #8a8a8a; }
    .stat-tabs button.active { background: var(--accent-2); color: #fff; }

    .stat-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(110px, 1fr)); gap: 10px; }
    .stat-cell { background: #fff; border-radius: 12px; padding: 10px; text-align: center; }
    .stat-cell .value { font-size: 1.3rem; font-weight: 700; color: var(--accent-2); }
    .stat-cell .label { font-size: .78rem; color: #8a8a8a; }

    .badges { display: grid; grid-template-columns: repeat(auto-fit, minmax(84px, 1fr)); gap: 10px; }
    .badge { text-align: center; background: #fff; border-radius: 14px; padding: 10px 4px; opacity: .35; }
    .badge.earned { opacity: 1; box-shadow: 0 2px 10px rgba(255, 181, 73, 0.35); }
    .badge .icon { font-size: 1.6rem; }
    .badge .name { font-size: .72rem; font-weight: 600; }

    .sync-row { display: flex; flex-wrap: wrap; gap: 8px; align-items: center; }
    .sync-row code { background: #fff; border-radius: 8px; padding: 4px 10px; font-weight: 700; letter-spacing: 2px; }
    .sync-row input { border-radius: 10px; border: 1.5px solid #ccd4f0; padding: 6px 10px; width: 110px; text-transform: uppercase; }
    .sync-row button { border: none; border-radius: 10px; padding: 6px 14px; background: var(--accent-2); color: #fff; cursor: pointer; }
    .sync-row button.danger { background: #f8638e; }

    .status { min-height: 20px; text-align: center; font-size: .85rem; color: #8a8a8a; }
    .status.error { color: #d33c56; }
    .status.ok { color: var(--ok); }
  </style>
</head>
<body>
  <div class="app">
    <h1>🦁 Daily Check-in 🦁</h1>

    <div>
      <div class="progress-track"><div class="progress-fill" id="progress-fill" style="width:0%"></div></div>
      <p class="progress-label" id="progress-label"></p>
    </div>

    <div class="week-nav">
      <button id="week-prev">«</button>
      <span id="week-range"></span>
      <button id="week-next">»</button>
    </div>
    <div class="week-strip" id="week-strip"></div>

    <div class="tabs" id="category-tabs"></div>
    <div id="category-card"></div>

    <div class="panel">
      <h2>Progress</h2>
      <div class="stat-tabs">
        <button data-view="week" class="active">Week</button>
        <button data-view="month">Month</button>
        <button data-view="year">Year</button>
      </div>
      <div class="stat-grid" id="stat-grid"></div>
    </div>

    <div class="panel">
      <h2>Badges</h2>
      <div class="badges" id="badges"></div>
    </div>

    <div class="panel">
      <h2>Sync</h2>
      <div class="sync-row">
        <span>Code:</span> <code id="sync-code">······</code>
        <button id="sync-publish">Publish</button>
        <input id="adopt-code" maxlength="6" placeholder="CODE" />
        <button id="sync-adopt">Adopt</button>
        <button id="clear-all" class="danger">Clear all</button>
      </div>
    </div>

    <p class="status" id="status"></p>
  </div>

  <script>
    const WEEKDAYS = ['Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat', 'Sun'];
    let currentDate = new Date().toISOString().split('T')[0];
    let activeCategory = null;
    let statView = 'week';

    const statusEl = document.getElementById('status');
    const setStatus = (text, kind) => {
      statusEl.textContent = text;
      statusEl.className = 'status' + (kind ? ' ' + kind : '');
    };

    const getJson = async (url) => {
      const res = await fetch(url);
      if (!res.ok) throw new Error(await res.text() || 'Request failed');
      return res.json();
    };

    const postJson = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) throw new Error(await res.text() || 'Request failed');
      return res.json();
    };

    const shiftDate = (key, days) => {
      const d = new Date(key + 'T00:00:00Z');
      d.setUTCDate(d.getUTCDate() + days);
      return d.toISOString().split('T')[0];
    };

    const renderDay = (day) => {
      const fill = document.getElementById('progress-fill');
      fill.style.width = day.stats.percent + '%';
      const label = document.getElementById('progress-label');
      label.textContent = day.date + ' — ' + day.stats.done + '/' + day.stats.total +
        ' (' + day.stats.percent + '%)';
      label.className = 'progress-label' + (day.stats.percent === 100 ? ' done' : '');

      const names = day.categories.map((c) => c.name);
      if (!names.includes(activeCategory)) activeCategory = names[0] || null;

      const tabs = document.getElementById('category-tabs');
      tabs.innerHTML = '';
      for (const name of names) {
        const btn = document.createElement('button');
        btn.textContent = name;
        if (name === activeCategory) btn.classList.add('active');
        btn.addEventListener('click', () => { activeCategory = name; renderDay(day); });
        tabs.appendChild(btn);
      }
      const addBtn = document.createElement('button');
      addBtn.className = 'add';
      addBtn.textContent = '+ Category';
      addBtn.addEventListener('click', async () => {
        const name = prompt('New category name');
        if (!name) return;
        await command('/api/category/add', { date: currentDate, name });
      });
      tabs.appendChild(addBtn);

      const card = document.getElementById('category-card');
      card.innerHTML = '';
      const category = day.categories.find((c) => c.name === activeCategory);
      if (!category) return;

      const head = document.createElement('div');
      head.className = 'category-head';
      const title = document.createElement('span');
      title.className = 'title';
      title.textContent = category.name;
      const del = document.createElement('button');
      del.textContent = '🗑 delete category';
      del.addEventListener('click', async () => {
        if (!confirm('Delete category ' + category.name + '?')) return;
        await command('/api/category/delete', { date: currentDate, category: category.name });
      });
      head.append(title, del);
      card.appendChild(head);

      category.tasks.forEach((task, index) => {
        const row = document.createElement('div');
        row.className = 'task' + (category.checked[index] ? ' checked' : '');
        const box = document.createElement('input');
        box.type = 'checkbox';
        box.checked = category.checked[index];
        box.addEventListener('change', () =>
          command('/api/toggle', { date: currentDate, category: category.name, index }));
        const name = document.createElement('span');
        name.className = 'name';
        name.textContent = task;
        const remove = document.createElement('button');
        remove.textContent = '✕';
        remove.addEventListener('click', () =>
          command('/api/task/delete', { date: currentDate, category: category.name, index }));
        row.append(box, name, remove);
        card.appendChild(row);
      });

      const addRow = document.createElement('div');
      addRow.className = 'add-task';
      const input = document.createElement('input');
      input.placeholder = 'New task';
      const submit = document.createElement('button');
      submit.textContent = '+';
      submit.addEventListener('click', async () => {
        if (!input.value.trim()) return;
        await command('/api/task/add', { date: currentDate, category: category.name, name: input.value });
        input.value = '';
      });
      addRow.append(input, submit);
      card.appendChild(addRow);
    };

    const renderWeek = (week) => {
      document.getElementById('week-range').textContent =
        week.start_date + ' ~ ' + week.end_date;
      const strip = document.getElementById('week-strip');
      strip.innerHTML = '';
      week.days.forEach((day, index) => {
        const cell = document.createElement('div');
        cell.className = 'week-day' + (day.date === currentDate ? ' active' : '');
        const bar = day.percent === 100 ? 'full' : '';
        cell.innerHTML = WEEKDAYS[index] + '<br><span>' + day.date.slice(5) + '</span>' +
          '<div class="bar"><div class="' + bar + '" style="width:' + day.percent + '%"></div></div>';
        cell.addEventListener('click', () => { currentDate = day.date; refresh(); });
        strip.appendChild(cell);
      });
    };

    const statCell = (value, label) =>
      '<div class="stat-cell"><div class="value">' + value + '</div>' +
      '<div class="label">' + label + '</div></div>';

    const renderStats = async () => {
      const grid = document.getElementById('stat-grid');
      if (statView === 'week') {
        const week = await getJson('/api/stats/week/' + currentDate);
        grid.innerHTML = statCell(week.done + '/' + week.total, 'tasks done') +
          statCell(week.percent + '%', 'completion') +
          statCell(week.complete_days, 'perfect days');
      } else if (statView === 'month') {
        const month = await getJson('/api/stats/month/' + currentDate);
        grid.innerHTML = statCell(month.done + '/' + month.total, 'tasks done') +
          statCell(month.percent + '%', 'completion') +
          statCell(month.active_days, 'active days');
      } else {
        const year = await getJson('/api/stats/year/' + currentDate.slice(0, 4));
        grid.innerHTML = statCell(year.done + '/' + year.total, 'tasks done') +
          statCell(year.percent + '%', 'completion') +
          statCell(year.perfect_months, 'perfect months');
      }
    };

    const renderBadges = async () => {
      const badges = await getJson('/api/badges');
      const grid = document.getElementById('badges');
      grid.innerHTML = '';
      for (const badge of badges) {
        const cell = document.createElement('div');
        cell.className = 'badge' + (badge.earned ? ' earned' : '');
        cell.title = badge.condition;
        cell.innerHTML = '<div class="icon">' + badge.icon + '</div>' +
          '<div class="name">' + badge.name + '</div>';
        grid.appendChild(cell);
      }
    };

    const renderSync = async () => {
      const info = await getJson('/api/sync');
      document.getElementById('sync-code').textContent = info.code;
      if (info.load_error) setStatus('Some saved data could not be read', 'error');
    };

    const refresh = async () => {
      const day = await getJson('/api/day/' + currentDate);
      renderDay(day);
      renderWeek(await getJson('/api/stats/week/' + currentDate));
      await Promise.all([renderStats(), renderBadges(), renderSync()]);
    };

    const command = async (url, body) => {
      try {
        await postJson(url, body);
        await refresh();
        setStatus('Saved', 'ok');
        setTimeout(() => setStatus('', ''), 1200);
      } catch (err) {
        setStatus(err.message, 'error');
        await refresh().catch(() => {});
      }
    };

    document.getElementById('week-prev').addEventListener('click', () => {
      currentDate = shiftDate(currentDate, -7);
      refresh();
    });
    document.getElementById('week-next').addEventListener('click', () => {
      currentDate = shiftDate(currentDate, 7);
      refresh();
    });

    document.querySelectorAll('.stat-tabs button').forEach((btn) => {
      btn.addEventListener('click', () => {
        document.querySelectorAll('.stat-tabs button').forEach((b) => b.classList.remove('active'));
        btn.classList.add('active');
        statView = btn.dataset.view;
        renderStats().catch((err) => setStatus(err.message, 'error'));
      });
    });

    document.getElementById('sync-publish').addEventListener('click', async () => {
      try {
        setStatus('Publishing...', '');
        await postJson('/api/sync/publish');
        setStatus('Published', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('sync-adopt').addEventListener('click', async () => {
      const code = document.getElementById('adopt-code').value;
      if (!code.trim()) return;
      try {
        await postJson('/api/sync/adopt', { code });
        await refresh();
        setStatus('Adopted snapshot ' + code.toUpperCase(), 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('clear-all').addEventListener('click', async () => {
      if (!confirm('Wipe all local data?')) return;
      try {
        await postJson('/api/clear');
        await refresh();
        setStatus('All data cleared', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
