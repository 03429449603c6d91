/// Renders the single-page dashboard. Profile names are embedded as a JSON
/// array; they are already restricted to `[A-Za-z0-9_-]`.
pub fn render_index(profiles: &[String]) -> String {
    let profiles = serde_json::to_string(profiles).unwrap_or_else(|_| "[]".to_string());
    INDEX_HTML.replace("{{PROFILES}}", &profiles)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Helper</title>
  <style>
    :root {
      --bg: #f6f1e7;
      --ink: #2b2a28;
      --muted: #7a746d;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --ok: #2d7a4b;
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 24px 16px 48px;
    }

    .app { width: min(900px, 100%); margin: 0 auto; display: grid; gap: 20px; }
    header { display: flex; justify-content: space-between; align-items: center; gap: 12px; flex-wrap: wrap; }
    h1 { margin: 0; font-family: Georgia, serif; }
    h2 { margin: 0 0 12px; font-size: 1.2rem; }
    .hidden { display: none !important; }

    .card {
      background: var(--card);
      border-radius: 18px;
      padding: 20px;
      box-shadow: 0 16px 40px rgba(47, 72, 88, 0.12);
    }

    .tabs { display: flex; gap: 6px; flex-wrap: wrap; }
    .tab, button {
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-weight: 600;
      cursor: pointer;
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }
    .tab.active, button.primary { background: var(--accent); color: white; }
    button:disabled { opacity: 0.35; cursor: default; }

    .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 12px; }
    .stat { background: white; border-radius: 14px; padding: 14px; }
    .stat .label { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.1em; color: var(--muted); }
    .stat .value { font-size: 1.5rem; font-weight: 600; color: var(--accent-2); }

    form { display: flex; gap: 8px; flex-wrap: wrap; margin-bottom: 12px; }
    input, select, textarea {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 10px;
      padding: 8px 10px;
      font: inherit;
    }

    ul { list-style: none; margin: 0; padding: 0; display: grid; gap: 8px; }
    li {
      background: white;
      border-radius: 12px;
      padding: 10px 12px;
      display: flex;
      align-items: center;
      gap: 10px;
    }
    li.done .name { text-decoration: line-through; color: var(--muted); }
    li .name { flex: 1; }
    .meta { color: var(--muted); font-size: 0.85rem; }
    .streak { color: var(--ok); font-weight: 600; }
    .status { min-height: 1.2em; color: #c63b2b; }
    .link { background: none; padding: 0; text-align: left; color: var(--accent-2); text-decoration: underline; }
    .detail { margin-top: 12px; background: white; border-radius: 14px; padding: 14px; }
    .detail h3 { margin: 12px 0 4px; font-size: 0.9rem; color: var(--muted); text-transform: uppercase; }
    .detail pre { margin: 0; white-space: pre-wrap; font: inherit; }
    .detail .actions { display: flex; gap: 8px; margin-top: 12px; }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Helper</h1>
      <div id="who" class="hidden">
        <span id="current-user"></span>
        <button id="logout" type="button">Switch profile</button>
      </div>
    </header>

    <section id="login" class="card">
      <h2>Who is tracking today?</h2>
      <div id="profile-buttons" class="tabs"></div>
      <form id="profile-form">
        <input id="profile-name" placeholder="Profile name" />
        <button class="primary" type="submit">Continue</button>
      </form>
    </section>

    <section id="main" class="hidden">
      <nav class="tabs" id="tabs">
        <button class="tab active" data-tab="home" type="button">Home</button>
        <button class="tab" data-tab="habits" type="button">Habits</button>
        <button class="tab" data-tab="stretches" type="button">Stretches</button>
        <button class="tab" data-tab="books" type="button">Reading</button>
        <button class="tab" data-tab="food" type="button">Food</button>
      </nav>
      <div class="status" id="status"></div>

      <div class="card panel" id="panel-home">
        <div class="stats" id="home-stats"></div>
        <h2 style="margin-top: 16px">Today's habits</h2>
        <ul id="quick-habits"></ul>
      </div>

      <div class="card panel hidden" id="panel-habits">
        <form id="habit-form">
          <input id="habit-name" placeholder="New habit" />
          <button class="primary" type="submit">Add</button>
        </form>
        <ul id="habit-list"></ul>
      </div>

      <div class="card panel hidden" id="panel-stretches">
        <form id="stretch-form">
          <input id="stretch-name" placeholder="Stretch" />
          <input id="stretch-area" placeholder="Body area (optional)" />
          <button class="primary" type="submit">Add</button>
        </form>
        <p class="meta" id="stretch-progress"></p>
        <ul id="stretch-list"></ul>
      </div>

      <div class="card panel hidden" id="panel-books">
        <form id="book-form">
          <input id="book-title" placeholder="Title" />
          <input id="book-author" placeholder="Author" />
          <input id="book-genre" placeholder="Genre" list="genre-list" />
          <datalist id="genre-list"></datalist>
          <select id="book-status">
            <option value="to_read">To Read</option>
            <option value="reading">Reading</option>
            <option value="finished">Finished</option>
          </select>
          <button class="primary" type="submit">Add</button>
        </form>
        <form id="book-filter">
          <select id="filter-status">
            <option value="">All statuses</option>
            <option value="to_read">To Read</option>
            <option value="reading">Reading</option>
            <option value="finished">Finished</option>
          </select>
          <select id="filter-genre"><option value="">All genres</option></select>
        </form>
        <ul id="book-list"></ul>
      </div>

      <div class="card panel hidden" id="panel-food">
        <h2>Freezer</h2>
        <form id="freezer-form">
          <input id="freezer-name" placeholder="Item" />
          <input id="freezer-qty" placeholder="Quantity" />
          <button class="primary" type="submit">Add</button>
        </form>
        <ul id="freezer-list"></ul>
        <h2 style="margin-top: 16px">Recipes</h2>
        <form id="recipe-form">
          <input id="recipe-name" placeholder="Recipe" />
          <input id="recipe-link" placeholder="Link" />
          <textarea id="recipe-ingredients" placeholder="Ingredients"></textarea>
          <textarea id="recipe-instructions" placeholder="Instructions"></textarea>
          <textarea id="recipe-notes" placeholder="Notes"></textarea>
          <button class="primary" type="submit">Add</button>
        </form>
        <ul id="recipe-list"></ul>
        <div class="detail hidden" id="recipe-detail">
          <h2 id="recipe-detail-name"></h2>
          <a id="recipe-detail-link" target="_blank" rel="noopener">Open recipe link</a>
          <div id="recipe-detail-body"></div>
          <div class="actions">
            <button id="recipe-detail-close" type="button">Close</button>
            <button id="recipe-detail-delete" type="button">Delete</button>
          </div>
        </div>
      </div>
    </section>
  </main>

  <script>
    const PROFILES = {{PROFILES}};
    const STORAGE_KEY = 'daily_helper_user';
    const $ = (id) => document.getElementById(id);
    let user = localStorage.getItem(STORAGE_KEY);
    let activeTab = 'home';

    const setStatus = (message) => { $('status').textContent = message || ''; };

    const api = async (path, options = {}) => {
      const res = await fetch(`/api/users/${encodeURIComponent(user)}${path}`, {
        headers: { 'content-type': 'application/json' },
        ...options,
        body: options.body ? JSON.stringify(options.body) : undefined
      });
      if (!res.ok) {
        const body = await res.json().catch(() => ({}));
        throw new Error(body.error || `Request failed (${res.status})`);
      }
      return res.status === 204 ? null : res.json();
    };

    const el = (tag, props = {}, children = []) => {
      const node = document.createElement(tag);
      Object.entries(props).forEach(([key, value]) => {
        if (key === 'onclick' || key === 'onchange') {
          node.addEventListener(key.slice(2), value);
        } else if (key === 'text') {
          node.textContent = value;
        } else {
          node[key] = value;
        }
      });
      children.forEach((child) => child && node.appendChild(child));
      return node;
    };

    const run = (action) => action().catch((err) => setStatus(err.message));

    const streakLabel = (streak) =>
      streak > 0
        ? el('span', { className: 'streak', text: `${streak} day${streak !== 1 ? 's' : ''} streak` })
        : el('span', { className: 'meta', text: 'No current streak' });

    const fill = (list, items, render, empty) => {
      list.replaceChildren(...(items.length ? items.map(render) : [el('li', { className: 'meta', text: empty })]));
    };

    const habitRow = (habit, refresh) =>
      el('li', { className: habit.completed_today ? 'done' : '' }, [
        el('button', {
          type: 'button',
          text: habit.completed_today ? '✓' : '○',
          onclick: () => run(async () => { await api(`/habits/${habit.id}/toggle`, { method: 'POST' }); await refresh(); })
        }),
        el('span', { className: 'name', text: habit.name }),
        streakLabel(habit.streak)
      ]);

    const loadHome = async () => {
      const data = await api('/dashboard');
      const stats = [
        ['Habits today', `${data.habits_completed} / ${data.habits_total}`],
        ['Stretches today', `${data.stretches_completed} / ${data.stretches_total}`],
        ['Reading', data.books.reading],
        ['To read', data.books.to_read],
        ['Finished', data.books.finished]
      ];
      $('home-stats').replaceChildren(...stats.map(([label, value]) =>
        el('div', { className: 'stat' }, [el('div', { className: 'label', text: label }), el('div', { className: 'value', text: String(value) })])));
      fill($('quick-habits'), data.quick_habits, (habit) => habitRow(habit, loadHome), 'No habits yet.');
    };

    const loadHabits = async () => {
      const habits = await api('/habits');
      fill($('habit-list'), habits, (habit) => {
        const row = habitRow(habit, loadHabits);
        row.appendChild(el('button', {
          type: 'button',
          text: 'Delete',
          onclick: () => confirm('Delete this habit?') && run(async () => { await api(`/habits/${habit.id}`, { method: 'DELETE' }); await loadHabits(); })
        }));
        return row;
      }, 'No habits yet! Add your first habit above.');
    };

    const moveButtons = (path, id, index, count, refresh) => [
      el('button', { type: 'button', text: '▲', disabled: index === 0, onclick: () => run(async () => { await api(`${path}/${id}/move`, { method: 'POST', body: { direction: 'up' } }); await refresh(); }) }),
      el('button', { type: 'button', text: '▼', disabled: index === count - 1, onclick: () => run(async () => { await api(`${path}/${id}/move`, { method: 'POST', body: { direction: 'down' } }); await refresh(); }) })
    ];

    const loadStretches = async () => {
      const data = await api('/stretches');
      $('stretch-progress').textContent = `Completed: ${data.completed} / ${data.total}`;
      fill($('stretch-list'), data.stretches, (stretch, index) =>
        el('li', { className: stretch.completed_today ? 'done' : '' }, [
          el('span', { className: 'meta', text: String(stretch.position) }),
          el('button', {
            type: 'button',
            text: stretch.completed_today ? '✓' : '○',
            onclick: () => run(async () => { await api(`/stretches/${stretch.id}/toggle`, { method: 'POST' }); await loadStretches(); })
          }),
          el('span', { className: 'name', text: stretch.name }),
          stretch.body_area ? el('span', { className: 'meta', text: stretch.body_area }) : null,
          streakLabel(stretch.streak),
          ...moveButtons('/stretches', stretch.id, index, data.stretches.length, loadStretches),
          el('button', {
            type: 'button',
            text: 'Delete',
            onclick: () => confirm('Delete this stretch?') && run(async () => { await api(`/stretches/${stretch.id}`, { method: 'DELETE' }); await loadStretches(); })
          })
        ]), 'No stretches yet! Add your first stretch above.');
    };

    const STATUS_LABELS = { to_read: 'To Read', reading: 'Reading', finished: 'Finished' };

    const loadBooks = async () => {
      const genres = await api('/genres');
      const selectedGenre = $('filter-genre').value;
      $('filter-genre').replaceChildren(el('option', { value: '', text: 'All genres' }),
        ...genres.map((genre) => el('option', { value: genre, text: genre, selected: genre === selectedGenre })));
      $('genre-list').replaceChildren(...genres.map((genre) => el('option', { value: genre })));

      const params = new URLSearchParams();
      if ($('filter-status').value) params.set('status', $('filter-status').value);
      if ($('filter-genre').value) params.set('genre', $('filter-genre').value);
      const query = params.toString();
      const books = await api(`/books${query ? `?${query}` : ''}`);
      const filtered = Boolean(query);

      fill($('book-list'), books, (book) => {
        const status = el('select', { onchange: () => run(async () => { await api(`/books/${book.id}`, { method: 'PATCH', body: { status: status.value } }); await loadBooks(); }) },
          Object.entries(STATUS_LABELS).map(([value, text]) => el('option', { value, text, selected: value === book.status })));
        const dateInput = (field) => {
          const input = el('input', { type: 'date', value: book[field] || '' });
          input.addEventListener('change', () => run(async () => { await api(`/books/${book.id}`, { method: 'PATCH', body: { [field]: input.value || null } }); await loadBooks(); }));
          return input;
        };
        return el('li', {}, [
          el('span', { className: 'name', text: book.author ? `${book.title} by ${book.author}` : book.title }),
          book.genre ? el('span', { className: 'meta', text: book.genre }) : null,
          status,
          dateInput('date_started'),
          dateInput('date_finished'),
          el('button', {
            type: 'button',
            text: 'Delete',
            onclick: () => confirm('Delete this book?') && run(async () => { await api(`/books/${book.id}`, { method: 'DELETE' }); await loadBooks(); })
          })
        ]);
      }, filtered ? 'No books match your filters.' : 'No books yet! Add your first book above.');
    };

    let openRecipeId = null;

    const closeRecipe = () => {
      openRecipeId = null;
      $('recipe-detail').classList.add('hidden');
    };

    const openRecipe = async (id) => {
      const recipe = await api(`/recipes/${id}`);
      openRecipeId = recipe.id;
      $('recipe-detail-name').textContent = recipe.name;
      $('recipe-detail-link').classList.toggle('hidden', !recipe.link);
      $('recipe-detail-link').href = recipe.link || '#';
      const sections = [
        ['Ingredients', recipe.ingredients, 'pre'],
        ['Instructions', recipe.instructions, 'pre'],
        ['Notes', recipe.notes, 'p']
      ].filter(([, value]) => value);
      $('recipe-detail-body').replaceChildren(...(sections.length
        ? sections.flatMap(([label, value, tag]) => [el('h3', { text: label }), el(tag, { text: value })])
        : [el('p', { className: 'meta', text: 'No details saved for this recipe.' })]));
      $('recipe-detail').classList.remove('hidden');
    };

    const deleteRecipe = async (id) => {
      await api(`/recipes/${id}`, { method: 'DELETE' });
      if (openRecipeId === id) closeRecipe();
      await loadFood();
    };

    const loadFood = async () => {
      const [items, recipes] = await Promise.all([api('/freezer'), api('/recipes')]);
      fill($('freezer-list'), items, (item, index) =>
        el('li', {}, [
          el('span', { className: 'name', text: item.name }),
          item.quantity ? el('span', { className: 'meta', text: item.quantity }) : null,
          el('span', { className: 'meta', text: `Added ${item.date_added}` }),
          ...moveButtons('/freezer', item.id, index, items.length, loadFood),
          el('button', { type: 'button', text: 'Used', onclick: () => run(async () => { await api(`/freezer/${item.id}`, { method: 'DELETE' }); await loadFood(); }) })
        ]), 'Freezer is empty! Add items above.');
      fill($('recipe-list'), recipes, (recipe) =>
        el('li', {}, [
          el('span', { className: 'name' }, [
            el('button', { type: 'button', className: 'link', text: recipe.name, onclick: () => run(() => openRecipe(recipe.id)) })
          ]),
          recipe.link ? el('a', { href: recipe.link, target: '_blank', rel: 'noopener', text: 'Open link' }) : null,
          el('button', {
            type: 'button',
            text: 'Delete',
            onclick: () => confirm('Delete this recipe?') && run(() => deleteRecipe(recipe.id))
          })
        ]), 'No recipes yet! Add your favorites above.');
    };

    const LOADERS = { home: loadHome, habits: loadHabits, stretches: loadStretches, books: loadBooks, food: loadFood };

    const showTab = (tab) => {
      activeTab = tab;
      document.querySelectorAll('.tab').forEach((button) => button.classList.toggle('active', button.dataset.tab === tab));
      document.querySelectorAll('.panel').forEach((panel) => panel.classList.toggle('hidden', panel.id !== `panel-${tab}`));
      setStatus('');
      run(LOADERS[tab]);
    };

    const showApp = () => {
      $('login').classList.add('hidden');
      $('main').classList.remove('hidden');
      $('who').classList.remove('hidden');
      $('current-user').textContent = user;
      showTab(activeTab);
    };

    const selectUser = (name) => {
      user = name;
      localStorage.setItem(STORAGE_KEY, name);
      showApp();
    };

    const showLogin = () => {
      localStorage.removeItem(STORAGE_KEY);
      user = null;
      $('login').classList.remove('hidden');
      $('main').classList.add('hidden');
      $('who').classList.add('hidden');
    };

    const onSubmit = (id, action) => {
      $(id).addEventListener('submit', (event) => {
        event.preventDefault();
        run(action);
      });
    };

    $('profile-buttons').replaceChildren(...PROFILES.map((name) =>
      el('button', { type: 'button', text: name, onclick: () => selectUser(name) })));
    $('profile-form').classList.toggle('hidden', PROFILES.length > 0);
    onSubmit('profile-form', async () => {
      const name = $('profile-name').value.trim();
      if (name) selectUser(name);
    });
    $('logout').addEventListener('click', showLogin);
    document.querySelectorAll('.tab').forEach((button) => button.addEventListener('click', () => showTab(button.dataset.tab)));

    onSubmit('habit-form', async () => {
      const name = $('habit-name').value.trim();
      if (!name) return;
      await api('/habits', { method: 'POST', body: { name } });
      $('habit-name').value = '';
      await loadHabits();
    });

    onSubmit('stretch-form', async () => {
      const name = $('stretch-name').value.trim();
      if (!name) return;
      await api('/stretches', { method: 'POST', body: { name, body_area: $('stretch-area').value.trim() } });
      $('stretch-name').value = '';
      $('stretch-area').value = '';
      await loadStretches();
    });

    onSubmit('book-form', async () => {
      const title = $('book-title').value.trim();
      if (!title) return;
      await api('/books', {
        method: 'POST',
        body: { title, author: $('book-author').value.trim(), genre: $('book-genre').value.trim(), status: $('book-status').value }
      });
      ['book-title', 'book-author', 'book-genre'].forEach((id) => { $(id).value = ''; });
      $('book-status').value = 'to_read';
      await loadBooks();
    });
    $('filter-status').addEventListener('change', () => run(loadBooks));
    $('recipe-detail-close').addEventListener('click', closeRecipe);
    $('recipe-detail-delete').addEventListener('click', () =>
      openRecipeId !== null && confirm('Delete this recipe?') && run(() => deleteRecipe(openRecipeId)));
    $('filter-genre').addEventListener('change', () => run(loadBooks));

    onSubmit('freezer-form', async () => {
      const name = $('freezer-name').value.trim();
      if (!name) return;
      await api('/freezer', { method: 'POST', body: { name, quantity: $('freezer-qty').value.trim() } });
      $('freezer-name').value = '';
      $('freezer-qty').value = '';
      await loadFood();
    });

    onSubmit('recipe-form', async () => {
      const name = $('recipe-name').value.trim();
      if (!name) return;
      const fields = ['link', 'ingredients', 'instructions', 'notes'];
      const body = { name };
      fields.forEach((field) => { body[field] = $(`recipe-${field}`).value.trim(); });
      await api('/recipes', { method: 'POST', body });
      ['recipe-name', ...fields.map((field) => `recipe-${field}`)].forEach((id) => { $(id).value = ''; });
      await loadFood();
    });

    if (user && (PROFILES.length === 0 || PROFILES.includes(user))) {
      showApp();
    } else {
      showLogin();
    }
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_profiles_as_json() {
        let html = render_index(&["ana".to_string(), "ben".to_string()]);
        assert!(html.contains(r#"const PROFILES = ["ana","ben"];"#));
        assert!(!html.contains("{{PROFILES}}"));
    }

    #[test]
    fn recipe_names_open_the_detail_view() {
        let html = render_index(&[]);
        assert!(html.contains(r#"id="recipe-detail""#));
        assert!(html.contains("await api(`/recipes/${id}`);"));
        assert!(html.contains("onclick: () => run(() => openRecipe(recipe.id))"));
    }

    #[test]
    fn empty_profiles_render_free_form_picker() {
        let html = render_index(&[]);
        assert!(html.contains("const PROFILES = [];"));
    }
}
